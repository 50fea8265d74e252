//! Main menu loop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use stockroom_inventory::Store;

use crate::actions;
use crate::config::CliConfig;
use crate::input::Console;
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    UpdateItem,
    RemoveItem,
    DisplayByCategory,
    DisplayAll,
    SearchItem,
    SortItems,
    DisplayLowStock,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddItem,
        MenuChoice::UpdateItem,
        MenuChoice::RemoveItem,
        MenuChoice::DisplayByCategory,
        MenuChoice::DisplayAll,
        MenuChoice::SearchItem,
        MenuChoice::SortItems,
        MenuChoice::DisplayLowStock,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddItem => "Add Item",
            MenuChoice::UpdateItem => "Update Item",
            MenuChoice::RemoveItem => "Remove Item",
            MenuChoice::DisplayByCategory => "Display Items by Category",
            MenuChoice::DisplayAll => "Display All Items",
            MenuChoice::SearchItem => "Search Item",
            MenuChoice::SortItems => "Sort Items",
            MenuChoice::DisplayLowStock => "Display Low Stock Items",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a single digit `1`..=`9`.
    pub fn parse(text: &str) -> Option<Self> {
        let [digit @ b'1'..=b'9'] = text.as_bytes() else {
            return None;
        };
        Self::ALL.get(usize::from(digit - b'1')).copied()
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    report::banner(console.writer(), "MENU")?;
    for (n, choice) in MenuChoice::ALL.iter().enumerate() {
        console.say(format!("{} - {}", n + 1, choice.label()))?;
    }
    Ok(())
}

/// Run the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut Store,
    config: &CliConfig,
) -> io::Result<()> {
    loop {
        show_menu(console)?;

        let choice = loop {
            console.say("\n> Please make a choice")?;
            let Some(line) = console.read_line("[CHOICE]: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };
            match MenuChoice::parse(&line) {
                Some(choice) => break choice,
                None => console.say("\n> Invalid choice! Please enter a number between 1 and 9.")?,
            }
        };

        debug!(?choice, records = store.len(), "menu selection");
        match choice {
            MenuChoice::AddItem => actions::add_item(console, store)?,
            MenuChoice::UpdateItem => actions::update_item(console, store)?,
            MenuChoice::RemoveItem => actions::remove_item(console, store)?,
            MenuChoice::DisplayByCategory => actions::display_by_category(console, store)?,
            MenuChoice::DisplayAll => actions::display_all(console, store)?,
            MenuChoice::SearchItem => actions::search_item(console, store)?,
            MenuChoice::SortItems => actions::sort_items(console, store)?,
            MenuChoice::DisplayLowStock => {
                actions::display_low_stock(console, store, config.low_stock_threshold)?
            }
            MenuChoice::Exit => {
                console.say("Exiting...")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_single_digits_only() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddItem));
        assert_eq!(MenuChoice::parse("8"), Some(MenuChoice::DisplayLowStock));
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse("a"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
