use crate::model;
use async_graphql::{InputObject, SimpleObject};

#[derive(SimpleObject)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub household_id: Option<i64>,
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            household_id: u.household_id,
        }
    }
}

#[derive(SimpleObject)]
pub struct Household {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(SimpleObject)]
pub struct ShoppingList {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub household_id: i64,
}

impl From<model::ShoppingList> for ShoppingList {
    fn from(l: model::ShoppingList) -> Self {
        Self {
            id: l.id,
            name: l.name,
            description: l.description,
            user_id: l.user_id,
            household_id: l.household_id,
        }
    }
}

#[derive(SimpleObject)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub unit: String,
    pub household_id: Option<i64>,
    pub shopping_list_id: Option<i64>,
}

impl From<model::FoodItem> for FoodItem {
    fn from(f: model::FoodItem) -> Self {
        Self {
            id: f.id,
            name: f.name,
            category: f.category,
            amount: f.amount,
            unit: f.unit,
            household_id: f.household_id,
            shopping_list_id: f.shopping_list_id,
        }
    }
}

/// Scoping filter for `foodItems`. Exactly one field must be set.
#[derive(InputObject, Default)]
pub struct FoodItemsQueryInput {
    pub household_id: Option<i64>,
    pub shopping_list_id: Option<i64>,
}
