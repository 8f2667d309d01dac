//! # Fridge - a GraphQL API for household food inventories
//!
//! Fridge keeps users, households, food items and shopping lists in SQLite and
//! exposes them through a GraphQL API and a small CLI.
//!
//! Every request passes through the [`dispatch`] layer: an operation name plus
//! an untyped argument bag is type-checked into a typed [`dispatch::Request`],
//! then forwarded as exactly one call to the [`storage::Gateway`].
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a project (writes .fridge.toml and creates the database)
//! fridge init
//!
//! # Dispatch an operation directly
//! fridge call GetFoodItems '{"householdId": 3}'
//!
//! # Run the GraphQL server
//! fridge serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`dispatch`]: Argument validation and dispatch
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models
//! - [`storage`]: SQLite-backed data access gateway

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.fridge.toml` configuration files and project discovery.
pub mod config;

pub mod dispatch;

/// Error types and result aliases.
///
/// Defines `FridgeError`, `ValidationError` and the `Result<T>` alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models for fridge.
pub mod model;

/// Data access gateway.
///
/// One store interaction per operation, against a pooled SQLite handle.
pub mod storage;
