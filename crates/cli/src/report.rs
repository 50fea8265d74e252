//! Text rendering of records and query results.

use std::io::{self, Write};

use stockroom_inventory::Record;

/// Width of banners and table rules.
pub const LINE_WIDTH: usize = 65;

/// `=` rule, centered title, `=` rule.
pub fn banner(w: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(LINE_WIDTH);
    let width = (LINE_WIDTH + title.len()) / 2;
    writeln!(w, "{rule}")?;
    writeln!(w, "{title:>width$}")?;
    writeln!(w, "{rule}")
}

pub fn table_header(w: &mut impl Write) -> io::Result<()> {
    writeln!(
        w,
        "{:<15}{:<10}{:<20}{:>10}{:>10}",
        "CATEGORY", "ID", "NAME", "QUANTITY", "PRICE"
    )?;
    writeln!(w, "{}", "-".repeat(LINE_WIDTH))
}

pub fn table_row(w: &mut impl Write, record: &Record) -> io::Result<()> {
    writeln!(
        w,
        "{:<15}{:<10}{:<20}{:>10}{:>10}",
        record.category().as_str(),
        record.item_id().as_str(),
        record.name(),
        record.quantity(),
        record.price(),
    )
}

/// Banner, header and one row per record.
pub fn table<'a>(
    w: &mut impl Write,
    title: &str,
    records: impl IntoIterator<Item = &'a Record>,
) -> io::Result<()> {
    banner(w, title)?;
    table_header(w)?;
    for record in records {
        table_row(w, record)?;
    }
    Ok(())
}

/// Multi-line detail view of one record.
pub fn card(w: &mut impl Write, record: &Record) -> io::Result<()> {
    writeln!(w, "Category: {}", record.category())?;
    writeln!(w, "ID: {}", record.item_id())?;
    writeln!(w, "Item Name: {}", record.name())?;
    writeln!(w, "Price: {}", record.price())?;
    writeln!(w, "Quantity: {}", record.quantity())
}
