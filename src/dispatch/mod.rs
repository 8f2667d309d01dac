//! Request validation and dispatch.
//!
//! A request arrives as an [`Operation`] plus an untyped [`ArgBag`]. The
//! [`Dispatcher`] turns the bag into a typed [`Request`], or rejects it with a
//! [`ValidationError`](crate::error::ValidationError) before the store is
//! touched. Valid requests become exactly one [`Gateway`] call.
//!
//! Rejections are reported twice: returned to the caller and handed to the
//! configured [`ValidationObserver`].

mod args;
mod operation;
mod payload;
mod request;


pub use args::{ArgBag, Slot};
pub use operation::Operation;
pub use payload::Payload;
pub use request::{FoodItemScope, Request};

use crate::error::{Result, ValidationError};
use crate::storage::Gateway;
use serde_json::Value;
use std::sync::Arc;

/// Side channel for rejected requests.
pub trait ValidationObserver: Send + Sync {
    fn rejected(&self, operation: Operation, error: &ValidationError);
}

/// Logs every rejection as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn rejected(&self, operation: Operation, error: &ValidationError) {
        tracing::warn!(operation = %operation, "{}", error);
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn Gateway>,
    observer: Arc<dyn ValidationObserver>,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ValidationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Validates `args` for `operation` and runs it.
    pub fn dispatch(&self, operation: Operation, args: &ArgBag) -> Result<Payload> {
        let request =
            Request::validate(operation, args).map_err(|err| self.reject(operation, err))?;
        self.execute(request)
    }

    /// Like [`dispatch`](Self::dispatch), for arguments that are not yet known
    /// to be an object. A non-object value is rejected like any other bad bag.
    pub fn dispatch_value(&self, operation: Operation, args: Value) -> Result<Payload> {
        let bag = ArgBag::try_from(args).map_err(|err| self.reject(operation, err))?;
        self.dispatch(operation, &bag)
    }

    fn reject(&self, operation: Operation, err: ValidationError) -> ValidationError {
        self.observer.rejected(operation, &err);
        err
    }

    /// Runs an already-validated request against the gateway.
    pub fn execute(&self, request: Request) -> Result<Payload> {
        let operation = request.operation();
        tracing::debug!(%operation, mutation = operation.is_mutation(), "Dispatching request");

        let gateway = self.gateway.as_ref();
        let payload = match request {
            Request::GetUsers { username } => Payload::Users(gateway.users_by_username(&username)?),
            Request::GetFoodItems(FoodItemScope::Household(id)) => {
                Payload::FoodItems(gateway.food_items_by_household_id(id)?)
            }
            Request::GetFoodItems(FoodItemScope::ShoppingList(id)) => {
                Payload::FoodItems(gateway.food_items_by_shopping_list_id(id)?)
            }
            Request::GetHouseholdId { user_id } => {
                Payload::HouseholdId(gateway.household_id_by_user_id(user_id)?)
            }
            Request::GetShoppingLists { household_id } => {
                Payload::ShoppingLists(gateway.shopping_lists_by_household_id(household_id)?)
            }
            Request::CreateFoodItem(item) => Payload::NewId(gateway.create_food_item(&item)?),
            Request::UpdateFoodItem { id, patch } => {
                gateway.update_food_item(id, &patch)?;
                Payload::Empty
            }
            Request::DeleteFoodItem { id } => {
                gateway.delete_food_item(id)?;
                Payload::Empty
            }
            Request::CreateShoppingList(list) => {
                Payload::NewId(gateway.create_shopping_list(&list)?)
            }
            Request::UpdateShoppingList { id, patch } => {
                gateway.update_shopping_list(id, &patch)?;
                Payload::Empty
            }
            Request::DeleteShoppingList { id } => {
                gateway.delete_shopping_list(id)?;
                Payload::Empty
            }
        };
        Ok(payload)
    }
}
