use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    pub name: String,
    pub category: String,
    pub amount: i64,
    pub unit: String,
    pub household_id: i64,
    pub shopping_list_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShoppingList {
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub household_id: i64,
}

/// Value carried by a single patch slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    Text(String),
    Int(i64),
}

/// Partial update of a food item. `None` slots are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount: Option<i64>,
    pub unit: Option<String>,
    pub household_id: Option<i64>,
    pub shopping_list_id: Option<i64>,
}

impl FoodItemPatch {
    /// Present slots as `(column, value)` pairs, in declaration order.
    pub fn assignments(&self) -> Vec<(&'static str, PatchValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "name", &self.name);
        push_text(&mut out, "category", &self.category);
        push_int(&mut out, "amount", self.amount);
        push_text(&mut out, "unit", &self.unit);
        push_int(&mut out, "household_id", self.household_id);
        push_int(&mut out, "shopping_list_id", self.shopping_list_id);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

/// Partial update of a shopping list. `None` slots are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingListPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<i64>,
    pub household_id: Option<i64>,
}

impl ShoppingListPatch {
    /// Present slots as `(column, value)` pairs, in declaration order.
    pub fn assignments(&self) -> Vec<(&'static str, PatchValue)> {
        let mut out = Vec::new();
        push_text(&mut out, "name", &self.name);
        push_text(&mut out, "description", &self.description);
        push_int(&mut out, "user_id", self.user_id);
        push_int(&mut out, "household_id", self.household_id);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

fn push_text(out: &mut Vec<(&'static str, PatchValue)>, column: &'static str, slot: &Option<String>) {
    if let Some(v) = slot {
        out.push((column, PatchValue::Text(v.clone())));
    }
}

fn push_int(out: &mut Vec<(&'static str, PatchValue)>, column: &'static str, slot: Option<i64>) {
    if let Some(v) = slot {
        out.push((column, PatchValue::Int(v)));
    }
}
