//! GraphQL schema and HTTP server for fridge.
//!
//! Every resolver packs its arguments into an argument bag and hands it to the
//! [`Dispatcher`](crate::dispatch::Dispatcher); the schema itself does no
//! validation beyond GraphQL scalar types.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! fridge serve --port 4000
//!
//! # Execute a query from CLI
//! fridge query '{ shoppingLists(householdId: 3) { id name } }'
//!
//! # Execute a mutation from CLI
//! fridge mutate 'deleteFoodItem(id: 5)'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `foodItems`, `householdId`, `household`, `shoppingLists`
//! - **Mutations**: `createFoodItem`, `updateFoodItem`, `deleteFoodItem`,
//!   `createShoppingList`, `updateShoppingList`, `deleteShoppingList`

mod schema;
mod server;
mod types;

pub use schema::{FridgeSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::*;
