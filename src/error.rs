use thiserror::Error;

/// Structural failure of an argument bag, raised before any store access.
///
/// Every message starts with `type-checking error:` and names the field, or
/// the combination of fields, that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("type-checking error: {0} was not a string")]
    NotAString(&'static str),

    #[error("type-checking error: {0} was not an int")]
    NotAnInt(&'static str),

    #[error("type-checking error: please provide only one of householdId or shoppingListId")]
    ConflictingScope,

    #[error(
        "type-checking error: please provide a valid foodItemsInput object (one of householdId and shoppingListId non-null)"
    )]
    MissingScope,

    #[error("type-checking error: params were invalid")]
    InvalidParams,

    #[error(
        "type-checking error: a combination of {} was misformed: {}",
        join_fields(.required),
        list_fields(.failed)
    )]
    Misformed {
        required: &'static [&'static str],
        failed: Vec<&'static str>,
    },
}

fn list_fields(fields: &[&str]) -> String {
    fields.join(", ")
}

/// Renders `[a, b, c]` as `a, b, and c`.
fn join_fields(fields: &[&str]) -> String {
    match fields {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

#[derive(Error, Debug)]
pub enum FridgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Store(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Project not initialized. Run 'fridge init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("Unexpected payload: expected {expected}, got {actual}")]
    UnexpectedPayload {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl FridgeError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FridgeError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, FridgeError>;
