use super::{Gateway, SqlitePool};
use crate::error::Result;
use crate::model::{
    FoodItem, FoodItemPatch, NewFoodItem, NewShoppingList, PatchValue, ShoppingList,
    ShoppingListPatch, User,
};
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, Row, params, params_from_iter};
use std::sync::Arc;

const FOOD_ITEM_COLUMNS: &str =
    "id, name, category, amount, unit, household_id, shopping_list_id";
const SHOPPING_LIST_COLUMNS: &str = "id, name, description, user_id, household_id";

/// Gateway over a shared [`SqlitePool`].
#[derive(Clone)]
pub struct SqliteGateway {
    pool: Arc<SqlitePool>,
}

impl SqliteGateway {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn food_items_where(&self, column: &str, value: i64) -> Result<Vec<FoodItem>> {
        let sql = format!(
            "SELECT {} FROM food_items WHERE {} = ?1 ORDER BY id",
            FOOD_ITEM_COLUMNS, column
        );
        self.pool.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![value], food_item_from_row)?;
            rows.collect()
        })
    }

    /// Applies `assignments` to row `id` of `table`. Nothing is sent when
    /// there is nothing to assign.
    fn apply_patch(
        &self,
        table: &str,
        id: i64,
        assignments: Vec<(&'static str, PatchValue)>,
    ) -> Result<()> {
        if assignments.is_empty() {
            tracing::debug!(table, id, "Empty patch, skipping update");
            return Ok(());
        }

        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            table,
            set_clause,
            assignments.len() + 1
        );

        let mut values: Vec<Value> = assignments
            .into_iter()
            .map(|(_, value)| match value {
                PatchValue::Text(s) => Value::Text(s),
                PatchValue::Int(i) => Value::Integer(i),
            })
            .collect();
        values.push(Value::Integer(id));

        let changed = self
            .pool
            .with_conn(|conn| conn.execute(&sql, params_from_iter(values)))?;
        tracing::debug!(table, id, changed, "Applied patch");
        Ok(())
    }

    fn delete_row(&self, table: &str, id: i64) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", table);
        let changed = self
            .pool
            .with_conn(|conn| conn.execute(&sql, params![id]))?;
        tracing::debug!(table, id, changed, "Deleted row");
        Ok(())
    }
}

fn food_item_from_row(row: &Row<'_>) -> rusqlite::Result<FoodItem> {
    Ok(FoodItem {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        unit: row.get(4)?,
        household_id: row.get(5)?,
        shopping_list_id: row.get(6)?,
    })
}

fn shopping_list_from_row(row: &Row<'_>) -> rusqlite::Result<ShoppingList> {
    Ok(ShoppingList {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        user_id: row.get(3)?,
        household_id: row.get(4)?,
    })
}

impl Gateway for SqliteGateway {
    fn users_by_username(&self, username: &str) -> Result<Vec<User>> {
        self.pool.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, username, household_id FROM users WHERE username = ?1 ORDER BY id",
            )?;
            let rows = stmt.query_map(params![username], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    household_id: row.get(2)?,
                })
            })?;
            rows.collect()
        })
    }

    fn food_items_by_household_id(&self, household_id: i64) -> Result<Vec<FoodItem>> {
        self.food_items_where("household_id", household_id)
    }

    fn food_items_by_shopping_list_id(&self, shopping_list_id: i64) -> Result<Vec<FoodItem>> {
        self.food_items_where("shopping_list_id", shopping_list_id)
    }

    fn household_id_by_user_id(&self, user_id: i64) -> Result<Option<i64>> {
        let found = self.pool.with_conn(|conn| {
            conn.query_row(
                "SELECT household_id FROM users WHERE id = ?1",
                params![user_id],
                |row| row.get::<_, Option<i64>>(0),
            )
            .optional()
        })?;
        Ok(found.flatten())
    }

    fn shopping_lists_by_household_id(&self, household_id: i64) -> Result<Vec<ShoppingList>> {
        let sql = format!(
            "SELECT {} FROM shopping_lists WHERE household_id = ?1 ORDER BY id",
            SHOPPING_LIST_COLUMNS
        );
        self.pool.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![household_id], shopping_list_from_row)?;
            rows.collect()
        })
    }

    fn create_food_item(&self, item: &NewFoodItem) -> Result<i64> {
        tracing::info!(name = %item.name, household_id = item.household_id, "Creating food item");
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO food_items (name, category, amount, unit, household_id, shopping_list_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    item.name,
                    item.category,
                    item.amount,
                    item.unit,
                    item.household_id,
                    item.shopping_list_id
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn update_food_item(&self, id: i64, patch: &FoodItemPatch) -> Result<()> {
        tracing::info!(id, "Updating food item");
        self.apply_patch("food_items", id, patch.assignments())
    }

    fn delete_food_item(&self, id: i64) -> Result<()> {
        tracing::info!(id, "Deleting food item");
        self.delete_row("food_items", id)
    }

    fn create_shopping_list(&self, list: &NewShoppingList) -> Result<i64> {
        tracing::info!(name = %list.name, household_id = list.household_id, "Creating shopping list");
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO shopping_lists (name, description, user_id, household_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![list.name, list.description, list.user_id, list.household_id],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn update_shopping_list(&self, id: i64, patch: &ShoppingListPatch) -> Result<()> {
        tracing::info!(id, "Updating shopping list");
        self.apply_patch("shopping_lists", id, patch.assignments())
    }

    fn delete_shopping_list(&self, id: i64) -> Result<()> {
        tracing::info!(id, "Deleting shopping list");
        self.delete_row("shopping_lists", id)
    }
}
