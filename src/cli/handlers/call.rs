use crate::dispatch::Operation;
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_call(ctx: CommandContext, operation: Operation, args: String) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(&args).context("Arguments must be valid JSON")?;
    let payload = ctx.dispatcher.dispatch_value(operation, value)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
