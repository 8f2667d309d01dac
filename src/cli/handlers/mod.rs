mod call;
mod init;
mod mutate;
mod query;
mod serve;

pub use call::handle_call;
pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::FridgeConfig;
use crate::dispatch::Dispatcher;
use crate::graphql::{FridgeSchema, build_schema};
use crate::storage::SqliteGateway;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FridgeConfig,
    pub root: PathBuf,
    pub dispatcher: Dispatcher,
}

impl CommandContext {
    pub fn new(config: FridgeConfig, root: PathBuf) -> Result<Self> {
        let pool = config.open_pool(&root).with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path(&root).display()
            )
        })?;
        let gateway = SqliteGateway::new(Arc::new(pool));
        let dispatcher = Dispatcher::new(Arc::new(gateway));
        Ok(Self {
            config,
            root,
            dispatcher,
        })
    }

    pub fn schema(&self) -> FridgeSchema {
        build_schema(self.dispatcher.clone())
    }
}

fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}
