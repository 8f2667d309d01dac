use crate::error::{FridgeError, Result};
use crate::model::{FoodItem, ShoppingList, User};
use serde::Serialize;

/// Successful result of a dispatched operation. `Empty` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Users(Vec<User>),
    FoodItems(Vec<FoodItem>),
    HouseholdId(Option<i64>),
    ShoppingLists(Vec<ShoppingList>),
    NewId(i64),
    Empty,
}

impl Payload {
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Users(_) => "users",
            Payload::FoodItems(_) => "food items",
            Payload::HouseholdId(_) => "household id",
            Payload::ShoppingLists(_) => "shopping lists",
            Payload::NewId(_) => "new id",
            Payload::Empty => "empty",
        }
    }

    pub fn into_users(self) -> Result<Vec<User>> {
        match self {
            Payload::Users(users) => Ok(users),
            other => Err(other.mismatch("users")),
        }
    }

    pub fn into_food_items(self) -> Result<Vec<FoodItem>> {
        match self {
            Payload::FoodItems(items) => Ok(items),
            other => Err(other.mismatch("food items")),
        }
    }

    pub fn into_household_id(self) -> Result<Option<i64>> {
        match self {
            Payload::HouseholdId(id) => Ok(id),
            other => Err(other.mismatch("household id")),
        }
    }

    pub fn into_shopping_lists(self) -> Result<Vec<ShoppingList>> {
        match self {
            Payload::ShoppingLists(lists) => Ok(lists),
            other => Err(other.mismatch("shopping lists")),
        }
    }

    pub fn into_new_id(self) -> Result<i64> {
        match self {
            Payload::NewId(id) => Ok(id),
            other => Err(other.mismatch("new id")),
        }
    }

    pub fn into_empty(self) -> Result<()> {
        match self {
            Payload::Empty => Ok(()),
            other => Err(other.mismatch("empty")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> FridgeError {
        FridgeError::UnexpectedPayload {
            expected,
            actual: self.kind(),
        }
    }
}
