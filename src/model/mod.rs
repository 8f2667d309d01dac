//! Data models for fridge.
//!
//! - [`User`], [`Household`], [`ShoppingList`], [`FoodItem`]: rows as read from the store
//! - [`NewFoodItem`], [`NewShoppingList`]: fully-typed insert payloads
//! - [`FoodItemPatch`], [`ShoppingListPatch`]: partial updates applied slot by slot

mod entities;
mod patch;

pub use entities::{FoodItem, Household, ShoppingList, User};
pub use patch::{FoodItemPatch, NewFoodItem, NewShoppingList, PatchValue, ShoppingListPatch};
