//! One function per menu entry.
//!
//! Each action borrows the store for the duration of the call; none of them keep a
//! handle to it. Cancellation, retry exhaustion and end of input all end the action
//! and return to the menu.

use std::io::{self, BufRead, Write};

use tracing::info;

use stockroom_core::InventoryError;
use stockroom_inventory::{
    Category, FieldUpdate, ItemId, Price, SortKey, SortOrder, Store, sort_snapshot,
    validate_id, validate_price, validate_quantity,
};

use crate::input::{Console, Prompt, parse_unsigned};
use crate::report;

/// Unwrap a prompt value or leave the action.
macro_rules! value_or_return {
    ($prompt:expr) => {
        match $prompt {
            Prompt::Value(value) => value,
            Prompt::Cancelled | Prompt::Exhausted | Prompt::Eof => return Ok(()),
        }
    };
}

const NO_ITEMS_HINT: &str = "Please add some items first.";

fn parse_new_id(text: &str, store: &Store) -> Result<ItemId, String> {
    let id = ItemId::new(text);
    if !validate_id(id.as_str()) {
        return Err("Invalid ID, please enter a valid ID (alphanumeric characters only).".into());
    }
    if store.contains(&id) {
        return Err(format!(
            "Error: An item with ID '{id}' already exists in the inventory."
        ));
    }
    Ok(id)
}

fn parse_existing_id(text: &str, store: &Store) -> Result<ItemId, String> {
    let id = ItemId::new(text);
    if !validate_id(id.as_str()) {
        return Err("Invalid ID.".into());
    }
    if !store.contains(&id) {
        return Err(format!("Item with ID {id} not found."));
    }
    Ok(id)
}

fn parse_price(text: &str) -> Result<Price, String> {
    text.parse::<Price>()
        .ok()
        .filter(|price| validate_price(*price))
        .ok_or_else(|| "Invalid price, please enter a positive value (only up to 10 digits).".into())
}

fn parse_quantity(text: &str) -> Result<u32, String> {
    parse_unsigned(text)
        .filter(|quantity| validate_quantity(*quantity))
        .ok_or_else(|| "Invalid quantity, please enter a positive whole number.".into())
}

fn parse_choice<T: Copy>(text: &str, options: &[(&str, T)], message: &str) -> Result<T, String> {
    options
        .iter()
        .find(|(key, _)| *key == text)
        .map(|(_, value)| *value)
        .ok_or_else(|| message.to_string())
}

pub fn add_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut Store,
) -> io::Result<()> {
    report::banner(console.writer(), "ADDING ITEM")?;
    console.say("> Adding Item...")?;
    let cancel_hint = format!("> Input '{}' to cancel anytime.\n", console.cancel_key());
    console.say(cancel_hint)?;

    let category = value_or_return!(console.prompt_parsed("[Category]: ", |text| {
        text.parse::<Category>().map_err(|_| {
            "Invalid category, please enter one of the following: clothing, entertainment, electronics."
                .to_string()
        })
    })?);
    let id = value_or_return!(console.prompt_parsed("[ID]: ", |text| parse_new_id(text, store))?);
    let name = value_or_return!(console.prompt_text("[Item Name]: ")?);
    let price = value_or_return!(console.prompt_parsed("[Price]: ", parse_price)?);
    let quantity = value_or_return!(console.prompt_parsed("[Quantity]: ", parse_quantity)?);

    match store.create(id, name, quantity, price, category) {
        Ok(record) => {
            info!(id = %record.item_id(), "item added");
            console.say("\n> Item added successfully!")?;
            report::card(console.writer(), record)?;
        }
        Err(err) => console.say(format!("\n> {err}"))?,
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateTarget {
    Quantity,
    Price,
}

pub fn update_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut Store,
) -> io::Result<()> {
    if store.is_empty() {
        report::banner(console.writer(), "UPDATE ITEM")?;
        return console.say(format!("> No items to update in inventory! {NO_ITEMS_HINT}"));
    }

    loop {
        report::banner(console.writer(), "UPDATE ITEM")?;
        console.say("> Enter ID to update")?;
        let cancel_hint = format!("> Input '{}' to cancel anytime.", console.cancel_key());
        console.say(cancel_hint)?;

        let id = value_or_return!(
            console.prompt_parsed("[ID]: ", |text| parse_existing_id(text, store))?
        );
        if let Ok(record) = store.find_by_id(&id) {
            console.say("\n> Item found, updating the following item...\n")?;
            report::card(console.writer(), record)?;
        }

        console.say("\n1 - Update Quantity\n2 - Update Price")?;
        let target = value_or_return!(console.prompt_parsed("\n[Choice]: ", |text| {
            parse_choice(
                text,
                &[("1", UpdateTarget::Quantity), ("2", UpdateTarget::Price)],
                "Invalid choice. Please select 1 or 2.",
            )
        })?);

        let (change, label) = match target {
            UpdateTarget::Quantity => {
                console.say("\n> Enter new quantity.")?;
                let quantity = value_or_return!(console.prompt_parsed("\n[Quantity]: ", |text| {
                    parse_unsigned(text)
                        .ok_or_else(|| "Invalid input, please enter a valid number.".to_string())
                })?);
                (FieldUpdate::Quantity(quantity), "Quantity")
            }
            UpdateTarget::Price => {
                console.say("\n> Enter new price.")?;
                let price = value_or_return!(console.prompt_parsed("\n[Price]: ", |text| {
                    text.parse::<Price>().map_err(|_| {
                        "Invalid price, please enter a positive value (only up to 10 digits)."
                            .to_string()
                    })
                })?);
                (FieldUpdate::Price(price), "Price")
            }
        };

        match store.update(&id, change) {
            Ok(record) => {
                info!(id = %id, field = label, "item updated");
                console.say(format!("\n> {label} updated successfully."))?;
                report::card(console.writer(), record)?;
            }
            Err(InventoryError::InvalidField(_)) => {
                console.say(format!("> {label} update failed due to invalid input."))?;
            }
            Err(err) => console.say(format!("> {err}"))?,
        }

        if !value_or_return!(console.confirm("\n> Update another item? [Y/N]: ")?) {
            break;
        }
    }

    console.say("> Exiting update item process.")
}

pub fn remove_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut Store,
) -> io::Result<()> {
    if store.is_empty() {
        report::banner(console.writer(), "REMOVE ITEM")?;
        return console.say(format!("> No items to remove in inventory! {NO_ITEMS_HINT}"));
    }

    loop {
        report::banner(console.writer(), "REMOVE ITEM")?;
        let id = value_or_return!(console.prompt_parsed("> Enter ID to remove: ", |text| {
            if text.is_empty() {
                Err("Invalid input! Please enter a valid ID.".to_string())
            } else {
                Ok(ItemId::new(text))
            }
        })?);

        match store.find_by_id(&id).cloned() {
            Ok(record) => {
                console.say("\n> Item found:")?;
                report::card(console.writer(), &record)?;

                if value_or_return!(console.confirm("\n> Confirm to delete item? [Y/N]: ")?) {
                    console.say("\n> Removing item...")?;
                    match store.remove(&id) {
                        Ok(removed) => {
                            info!(id = %removed.item_id(), "item removed");
                            console.say("\n> Item removed successfully.")?;
                        }
                        Err(err) => console.say(format!("> {err}"))?,
                    }
                } else {
                    console.say("\n> Item removal cancelled.")?;
                }
            }
            Err(_) => console.say(format!("> Item with ID {id} not found."))?,
        }

        if !value_or_return!(console.confirm("\n> Remove another item? [Y/N]: ")?) {
            return Ok(());
        }
    }
}

pub fn search_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> io::Result<()> {
    if store.is_empty() {
        report::banner(console.writer(), "SEARCH ITEM")?;
        return console.say(format!("> No items to search in inventory! {NO_ITEMS_HINT}"));
    }

    loop {
        report::banner(console.writer(), "SEARCH ITEM")?;
        let id = value_or_return!(console.prompt_parsed("> Enter ID to search: ", |text| {
            if text.is_empty() {
                Err("Invalid input! Please enter a valid ID.".to_string())
            } else {
                Ok(ItemId::new(text))
            }
        })?);

        match store.find_by_id(&id) {
            Ok(record) => {
                console.say("> Item found!\n")?;
                report::card(console.writer(), record)?;
            }
            Err(_) => console.say(format!("> Item with ID {id} not found."))?,
        }

        if !value_or_return!(console.confirm("\n> Search another item? [Y/N]: ")?) {
            return Ok(());
        }
    }
}

pub fn display_by_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> io::Result<()> {
    const TITLE: &str = "ITEMS BY CATEGORY";

    if store.is_empty() {
        report::banner(console.writer(), TITLE)?;
        return console.say(format!("> No items to display in inventory! {NO_ITEMS_HINT}"));
    }

    loop {
        report::banner(console.writer(), TITLE)?;
        console.say("> Select category:\n1 - Clothing\n2 - Electronics\n3 - Entertainment")?;
        let category = value_or_return!(console.prompt_parsed("[CHOICE]: ", |text| {
            parse_choice(
                text,
                &[
                    ("1", Category::Clothing),
                    ("2", Category::Electronics),
                    ("3", Category::Entertainment),
                ],
                "Invalid choice!",
            )
        })?);

        let matches = store.filter_by_category(category);
        report::table(console.writer(), TITLE, matches.iter().copied())?;
        if matches.is_empty() {
            console.say(format!(
                "> No items found in the {} category.",
                category.label()
            ))?;
        }

        if !value_or_return!(console.confirm("\n> View another category? [Y/N]: ")?) {
            break;
        }
    }

    console.say("> Exiting category view.")
}

pub fn display_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> io::Result<()> {
    if store.is_empty() {
        report::banner(console.writer(), "INVENTORY")?;
        return console.say(format!("> No items to display in inventory! {NO_ITEMS_HINT}"));
    }
    report::table(console.writer(), "INVENTORY", store.records())
}

pub fn sort_items<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> io::Result<()> {
    const TITLE: &str = "SORTED ITEMS";

    if store.len() <= 1 {
        report::banner(console.writer(), TITLE)?;
        return console
            .say("> Not enough items to sort! Please ensure you have more than 1 item.");
    }

    loop {
        report::banner(console.writer(), TITLE)?;
        console.say("> How would you like to sort the items?\n1 - Price\n2 - Quantity\n")?;
        let key = value_or_return!(console.prompt_parsed("[CHOICE]: ", |text| {
            parse_choice(
                text,
                &[("1", SortKey::Price), ("2", SortKey::Quantity)],
                "Invalid choice! Please enter 1 or 2.",
            )
        })?);

        console.say("\n> Sort in which order?\n1 - Ascending\n2 - Descending\n")?;
        let order = value_or_return!(console.prompt_parsed("[CHOICE]: ", |text| {
            parse_choice(
                text,
                &[("1", SortOrder::Ascending), ("2", SortOrder::Descending)],
                "Invalid choice! Please enter 1 or 2.",
            )
        })?);

        let sorted = sort_snapshot(store.snapshot(), key, order);
        report::table(console.writer(), TITLE, &sorted)?;

        if !value_or_return!(console.confirm("> Would you like to sort again? [Y/N]: ")?) {
            return Ok(());
        }
    }
}

pub fn display_low_stock<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
    threshold: u32,
) -> io::Result<()> {
    const TITLE: &str = "MONITORING LOW STOCK";

    if store.is_empty() {
        report::banner(console.writer(), TITLE)?;
        return console.say(format!("> No items to display in inventory! {NO_ITEMS_HINT}"));
    }

    let low = store.filter_low_stock(threshold);
    report::table(console.writer(), TITLE, low.iter().copied())?;
    if low.is_empty() {
        console.say("\n> No items are currently low in stock.")?;
    }
    Ok(())
}
