use std::fmt;
use std::str::FromStr;

/// Every operation the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetUsers,
    GetFoodItems,
    GetHouseholdId,
    GetHousehold,
    GetShoppingLists,
    CreateFoodItem,
    UpdateFoodItem,
    DeleteFoodItem,
    CreateShoppingList,
    UpdateShoppingList,
    DeleteShoppingList,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::GetUsers,
        Operation::GetFoodItems,
        Operation::GetHouseholdId,
        Operation::GetHousehold,
        Operation::GetShoppingLists,
        Operation::CreateFoodItem,
        Operation::UpdateFoodItem,
        Operation::DeleteFoodItem,
        Operation::CreateShoppingList,
        Operation::UpdateShoppingList,
        Operation::DeleteShoppingList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::GetUsers => "GetUsers",
            Operation::GetFoodItems => "GetFoodItems",
            Operation::GetHouseholdId => "GetHouseholdId",
            Operation::GetHousehold => "GetHousehold",
            Operation::GetShoppingLists => "GetShoppingLists",
            Operation::CreateFoodItem => "CreateFoodItem",
            Operation::UpdateFoodItem => "UpdateFoodItem",
            Operation::DeleteFoodItem => "DeleteFoodItem",
            Operation::CreateShoppingList => "CreateShoppingList",
            Operation::UpdateShoppingList => "UpdateShoppingList",
            Operation::DeleteShoppingList => "DeleteShoppingList",
        }
    }

    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Operation::CreateFoodItem
                | Operation::UpdateFoodItem
                | Operation::DeleteFoodItem
                | Operation::CreateShoppingList
                | Operation::UpdateShoppingList
                | Operation::DeleteShoppingList
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Case-insensitive, so `getUsers` and `getusers` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("getFoodItems".parse::<Operation>(), Ok(Operation::GetFoodItems));
        assert_eq!("DELETESHOPPINGLIST".parse::<Operation>(), Ok(Operation::DeleteShoppingList));
        assert!("DropTables".parse::<Operation>().is_err());
    }

    #[test]
    fn test_names_are_unique() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_mutations() {
        assert!(Operation::CreateFoodItem.is_mutation());
        assert!(!Operation::GetHousehold.is_mutation());
    }
}
