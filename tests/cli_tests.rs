use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fridge_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fridge"))
}

/// Initialized project with household 3 and user 7 seeded.
fn setup_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    fridge_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let conn = rusqlite::Connection::open(temp_dir.path().join("fridge.db")).unwrap();
    conn.execute_batch(
        "INSERT INTO households (id, name) VALUES (3, 'Flat');
         INSERT INTO users (id, username, household_id) VALUES (7, 'alice', 3);",
    )
    .unwrap();

    temp_dir
}

fn call(temp_dir: &TempDir, operation: &str, args: &str) -> assert_cmd::assert::Assert {
    fridge_cmd()
        .args(["call", operation, args])
        .current_dir(temp_dir.path())
        .assert()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    fridge_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("food inventories"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    fridge_cmd()
        .args(["call", "GetUsers", r#"{"username": "alice"}"#])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config_and_database() {
    let temp_dir = TempDir::new().unwrap();

    fridge_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".fridge.toml").exists());
    assert!(temp_dir.path().join("fridge.db").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = setup_test_project();

    fridge_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_custom_db_path() {
    let temp_dir = TempDir::new().unwrap();

    fridge_cmd()
        .args(["init", "--db-path", "data/pantry.db", "--port", "8080"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp_dir.path().join(".fridge.toml")).unwrap();
    assert!(config.contains("data/pantry.db"));
    assert!(config.contains("8080"));
    assert!(temp_dir.path().join("data/pantry.db").exists());
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_call_get_users() {
    let temp_dir = setup_test_project();

    call(&temp_dir, "GetUsers", r#"{"username": "alice"}"#)
        .success()
        .stdout(predicate::str::contains("\"username\": \"alice\""));
}

#[test]
fn test_call_create_shopping_list_prints_id() {
    let temp_dir = setup_test_project();

    call(
        &temp_dir,
        "CreateShoppingList",
        r#"{"name": "Groceries", "description": "Weekly", "userId": 7, "householdId": 3}"#,
    )
    .success()
    .stdout(predicate::str::diff("1\n"));
}

#[test]
fn test_call_conflicting_scope() {
    let temp_dir = setup_test_project();

    call(
        &temp_dir,
        "GetFoodItems",
        r#"{"householdId": 3, "shoppingListId": 9}"#,
    )
    .failure()
    .stderr(predicate::str::contains(
        "please provide only one of householdId or shoppingListId",
    ));
}

#[test]
fn test_call_update_with_bad_id() {
    let temp_dir = setup_test_project();

    call(&temp_dir, "UpdateFoodItem", r#"{"id": "abc"}"#)
        .failure()
        .stderr(predicate::str::contains("id was not an int"));
}

#[test]
fn test_call_delete_is_repeatable() {
    let temp_dir = setup_test_project();

    for _ in 0..2 {
        call(&temp_dir, "deleteFoodItem", r#"{"id": 5}"#)
            .success()
            .stdout(predicate::str::diff("null\n"));
    }
}

#[test]
fn test_call_unknown_operation() {
    let temp_dir = setup_test_project();

    call(&temp_dir, "DropTables", "{}")
        .failure()
        .stderr(predicate::str::contains("unknown operation"));
}

#[test]
fn test_call_rejects_non_object_arguments() {
    let temp_dir = setup_test_project();

    call(&temp_dir, "GetUsers", "[1, 2]")
        .failure()
        .stderr(predicate::str::contains("params were invalid"));
}

#[test]
fn test_call_logs_non_object_rejection() {
    let temp_dir = setup_test_project();
    let log_dir = temp_dir.path().join("logs");

    fridge_cmd()
        .args(["--log-file"])
        .arg(log_dir.join("fridge.log"))
        .args(["call", "GetUsers", "[1, 2]"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();

    let logged: String = std::fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    assert!(logged.contains("\"level\":\"WARN\""));
    assert!(logged.contains("type-checking error: params were invalid"));
    assert!(logged.contains("GetUsers"));
}

// =============================================================================
// GraphQL
// =============================================================================

#[test]
fn test_query_and_mutate() {
    let temp_dir = setup_test_project();

    fridge_cmd()
        .args([
            "mutate",
            r#"createShoppingList(name: "Groceries", description: "Weekly", userId: 7, householdId: 3)"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"createShoppingList\": 1"));

    fridge_cmd()
        .args(["query", "{ shoppingLists(householdId: 3) { name } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = setup_test_project();

    fridge_cmd()
        .args([
            "query",
            "query($name: String) { users(username: $name) { id } }",
            "--variables",
            r#"{"name": "alice"}"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 7"));
}
