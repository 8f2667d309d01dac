use crate::config::{CONFIG_FILE_NAME, DatabaseSettings, FridgeConfig, ServerSettings};
use crate::error::FridgeError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(db_path: String, port: u16) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(FridgeError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = FridgeConfig {
        database: DatabaseSettings {
            path: db_path,
            ..Default::default()
        },
        server: ServerSettings {
            port,
            ..Default::default()
        },
    };

    // Opening the pool creates the database file and its tables
    config.open_pool(&cwd)?;
    config.save(&config_path)?;

    println!(
        "{} fridge project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:   {}", config_path.display());
    println!("  Database: {}", config.database_path(&cwd).display());

    Ok(())
}
