use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use fridge::cli::handlers::{
    CommandContext, handle_call, handle_init, handle_mutate, handle_query, handle_serve,
};
use fridge::cli::{Cli, Commands};
use fridge::config::FridgeConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    fridge::logging::init(cli.verbose, cli.log_file);

    match cli.command {
        Commands::Init { db_path, port } => handle_init(db_path, port),
        Commands::Call { operation, args } => {
            handle_call(load_context(cli.config.as_deref())?, operation, args)
        }
        Commands::Query { query, variables } => {
            handle_query(load_context(cli.config.as_deref())?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load_context(cli.config.as_deref())?, mutation, variables),
        Commands::Serve { host, port } => {
            handle_serve(load_context(cli.config.as_deref())?, host, port)
        }
    }
}

fn load_context(config_path: Option<&Path>) -> Result<CommandContext> {
    let (config, root) = match config_path {
        Some(path) => FridgeConfig::load_from(path),
        None => FridgeConfig::load(&std::env::current_dir()?),
    }
    .context("Failed to load fridge configuration")?;
    CommandContext::new(config, root)
}
