use std::io;

use dotenv::dotenv;
use env_logger::Env;

mod config;
mod console;
mod db;
mod errors;
mod handlers;
mod models;
mod prompt;

use crate::config::Config;
use crate::console::Console;
use crate::db::BookingStore;

fn main() -> anyhow::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let config = Config::from_env()?;
    log::info!(
        "Starting hotel console with {} rooms per hotel",
        config.default_room_count
    );

    let store = BookingStore::new(config.default_room_count);
    let stdin = io::stdin();
    let mut console = Console::new(store, stdin.lock(), io::stdout());
    console.run()?;

    Ok(())
}
