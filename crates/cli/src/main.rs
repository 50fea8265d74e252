//! Interactive inventory console entry point.

use std::io;

use anyhow::Context;

use stockroom_cli::{CliConfig, Console};
use stockroom_inventory::Store;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = CliConfig::from_env().context("invalid STOCKROOM_* configuration")?;
    tracing::info!(
        low_stock_threshold = config.low_stock_threshold,
        max_retries = config.max_retries,
        "starting inventory console"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), &config);
    let mut store = Store::new();

    stockroom_cli::run(&mut console, &mut store, &config).context("console I/O failed")?;

    tracing::info!(records = store.len(), "inventory console closed");
    Ok(())
}
