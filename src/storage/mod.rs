//! Data access gateway for fridge.
//!
//! Every method on [`Gateway`] maps to exactly one store interaction. Lookups
//! return possibly empty sequences, creates return the new row id, and updates
//! and deletes return nothing. Store failures surface as
//! [`FridgeError::Store`](crate::error::FridgeError::Store) untouched.
//!
//! ## Components
//!
//! - [`Gateway`]: the operations the dispatcher forwards to
//! - [`SqliteGateway`]: the rusqlite-backed implementation
//! - [`SqlitePool`]: shared connection handle with idle-connection reuse

mod pool;
mod schema;
mod sqlite_gateway;

pub use pool::SqlitePool;
pub use schema::SCHEMA;
pub use sqlite_gateway::SqliteGateway;

use crate::error::Result;
use crate::model::{
    FoodItem, FoodItemPatch, NewFoodItem, NewShoppingList, ShoppingList, ShoppingListPatch, User,
};

pub trait Gateway: Send + Sync {
    fn users_by_username(&self, username: &str) -> Result<Vec<User>>;

    fn food_items_by_household_id(&self, household_id: i64) -> Result<Vec<FoodItem>>;

    fn food_items_by_shopping_list_id(&self, shopping_list_id: i64) -> Result<Vec<FoodItem>>;

    /// `None` when the user is unknown or belongs to no household.
    fn household_id_by_user_id(&self, user_id: i64) -> Result<Option<i64>>;

    fn shopping_lists_by_household_id(&self, household_id: i64) -> Result<Vec<ShoppingList>>;

    fn create_food_item(&self, item: &NewFoodItem) -> Result<i64>;

    fn update_food_item(&self, id: i64, patch: &FoodItemPatch) -> Result<()>;

    fn delete_food_item(&self, id: i64) -> Result<()>;

    fn create_shopping_list(&self, list: &NewShoppingList) -> Result<i64>;

    fn update_shopping_list(&self, id: i64, patch: &ShoppingListPatch) -> Result<()>;

    fn delete_shopping_list(&self, id: i64) -> Result<()>;
}
