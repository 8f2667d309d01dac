use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub household_id: i64,
}

/// A food item is scoped to a household, a shopping list, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_list_id: Option<i64>,
}
