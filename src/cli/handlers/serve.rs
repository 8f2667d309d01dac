use crate::graphql::run_server;
use anyhow::{Context, Result};
use std::net::SocketAddr;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let schema = ctx.schema();

    println!("Starting GraphQL server on http://{}", addr);
    println!("GraphiQL: http://{}", addr);

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, addr))?;
    Ok(())
}
