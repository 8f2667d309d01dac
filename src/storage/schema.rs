/// Tables backing the gateway. Applied on every open; idempotent.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS households (
    id   INTEGER PRIMARY KEY,
    name TEXT
);

CREATE TABLE IF NOT EXISTS users (
    id           INTEGER PRIMARY KEY,
    username     TEXT NOT NULL UNIQUE,
    household_id INTEGER REFERENCES households(id) ON DELETE SET NULL
);

CREATE TABLE IF NOT EXISTS shopping_lists (
    id           INTEGER PRIMARY KEY,
    name         TEXT NOT NULL,
    description  TEXT NOT NULL,
    user_id      INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    household_id INTEGER NOT NULL REFERENCES households(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS food_items (
    id               INTEGER PRIMARY KEY,
    name             TEXT NOT NULL,
    category         TEXT NOT NULL,
    amount           INTEGER NOT NULL,
    unit             TEXT NOT NULL,
    household_id     INTEGER REFERENCES households(id) ON DELETE CASCADE,
    shopping_list_id INTEGER REFERENCES shopping_lists(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_food_items_household ON food_items(household_id);
CREATE INDEX IF NOT EXISTS idx_food_items_shopping_list ON food_items(shopping_list_id);
CREATE INDEX IF NOT EXISTS idx_shopping_lists_household ON shopping_lists(household_id);
";
