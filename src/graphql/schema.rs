use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::dispatch::{ArgBag, Dispatcher, Operation, Payload};
use crate::error::FridgeError;

use super::types::*;

pub type FridgeSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(dispatcher: Dispatcher) -> FridgeSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(dispatcher)
        .finish()
}

/// Arguments are declared nullable throughout: presence and shape are the
/// dispatcher's call, not the schema's.
fn dispatch(ctx: &Context<'_>, operation: Operation, args: ArgBag) -> async_graphql::Result<Payload> {
    let dispatcher = ctx.data::<Dispatcher>()?;
    Ok(dispatcher.dispatch(operation, &args)?)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Users with the given username
    async fn users(
        &self,
        ctx: &Context<'_>,
        username: Option<String>,
    ) -> async_graphql::Result<Vec<User>> {
        let args = ArgBag::new().with("username", username);
        let users = dispatch(ctx, Operation::GetUsers, args)?.into_users()?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Food items owned by a household or listed on a shopping list
    async fn food_items(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "foodItemsQueryInput")] input: Option<FoodItemsQueryInput>,
    ) -> async_graphql::Result<Vec<FoodItem>> {
        let input = input.unwrap_or_default();
        let args = ArgBag::new()
            .with("householdId", input.household_id)
            .with("shoppingListId", input.shopping_list_id);
        let items = dispatch(ctx, Operation::GetFoodItems, args)?.into_food_items()?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    /// Household a user belongs to, or null
    async fn household_id(
        &self,
        ctx: &Context<'_>,
        user_id: Option<i64>,
    ) -> async_graphql::Result<Option<i64>> {
        let args = ArgBag::new().with("userId", user_id);
        Ok(dispatch(ctx, Operation::GetHouseholdId, args)?.into_household_id()?)
    }

    /// Not available yet; always returns an error
    async fn household(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        user_id: Option<i64>,
    ) -> async_graphql::Result<Option<Household>> {
        let args = ArgBag::new().with("id", id).with("userId", user_id);
        let payload = dispatch(ctx, Operation::GetHousehold, args)?;
        Err(FridgeError::UnexpectedPayload {
            expected: "household",
            actual: payload.kind(),
        }
        .into())
    }

    /// Shopping lists of a household
    async fn shopping_lists(
        &self,
        ctx: &Context<'_>,
        household_id: Option<i64>,
    ) -> async_graphql::Result<Vec<ShoppingList>> {
        let args = ArgBag::new().with("householdId", household_id);
        let lists = dispatch(ctx, Operation::GetShoppingLists, args)?.into_shopping_lists()?;
        Ok(lists.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a food item and return its id
    async fn create_food_item(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        category: Option<String>,
        amount: Option<i64>,
        unit: Option<String>,
        household_id: Option<i64>,
        shopping_list_id: Option<i64>,
    ) -> async_graphql::Result<i64> {
        let args = ArgBag::new()
            .with("name", name)
            .with("category", category)
            .with("amount", amount)
            .with("unit", unit)
            .with("householdId", household_id)
            .with("shoppingListId", shopping_list_id);
        Ok(dispatch(ctx, Operation::CreateFoodItem, args)?.into_new_id()?)
    }

    /// Update the given fields of a food item
    async fn update_food_item(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        name: Option<String>,
        category: Option<String>,
        amount: Option<i64>,
        unit: Option<String>,
        household_id: Option<i64>,
        shopping_list_id: Option<i64>,
    ) -> async_graphql::Result<bool> {
        let args = ArgBag::new()
            .with("id", id)
            .with("name", name)
            .with("category", category)
            .with("amount", amount)
            .with("unit", unit)
            .with("householdId", household_id)
            .with("shoppingListId", shopping_list_id);
        dispatch(ctx, Operation::UpdateFoodItem, args)?.into_empty()?;
        Ok(true)
    }

    /// Delete a food item
    async fn delete_food_item(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
    ) -> async_graphql::Result<bool> {
        let args = ArgBag::new().with("id", id);
        dispatch(ctx, Operation::DeleteFoodItem, args)?.into_empty()?;
        Ok(true)
    }

    /// Create a shopping list and return its id
    async fn create_shopping_list(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        description: Option<String>,
        user_id: Option<i64>,
        household_id: Option<i64>,
    ) -> async_graphql::Result<i64> {
        let args = ArgBag::new()
            .with("name", name)
            .with("description", description)
            .with("userId", user_id)
            .with("householdId", household_id);
        Ok(dispatch(ctx, Operation::CreateShoppingList, args)?.into_new_id()?)
    }

    /// Update the given fields of a shopping list
    async fn update_shopping_list(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        name: Option<String>,
        description: Option<String>,
        user_id: Option<i64>,
        household_id: Option<i64>,
    ) -> async_graphql::Result<bool> {
        let args = ArgBag::new()
            .with("id", id)
            .with("name", name)
            .with("description", description)
            .with("userId", user_id)
            .with("householdId", household_id);
        dispatch(ctx, Operation::UpdateShoppingList, args)?.into_empty()?;
        Ok(true)
    }

    /// Delete a shopping list
    async fn delete_shopping_list(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
    ) -> async_graphql::Result<bool> {
        let args = ArgBag::new().with("id", id);
        dispatch(ctx, Operation::DeleteShoppingList, args)?.into_empty()?;
        Ok(true)
    }
}
