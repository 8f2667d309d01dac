use crate::dispatch::Operation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fridge")]
#[command(
    author,
    version,
    about = "A GraphQL API for household food inventories and shopping lists"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .fridge.toml by default)
    #[arg(long, global = true, env = "FRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "FRIDGE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new fridge project and create its database
    Init {
        /// Database file, relative to the project directory
        #[arg(long, default_value = "fridge.db")]
        db_path: String,

        /// Port the GraphQL server listens on
        #[arg(long, default_value_t = 4000)]
        port: u16,
    },

    /// Dispatch one operation with a JSON argument bag
    Call {
        /// Operation name, e.g. GetFoodItems or createShoppingList
        operation: Operation,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
