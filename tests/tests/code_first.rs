use tests::{
    models::{date, Profile, User},
    prelude::*,
    setup,
};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn table_is_created_once() {
    let (db, log) = setup(true);

    let mut ann = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    let mut bob = User::new("bob", "pw", 41, date("2024-03-02 09:00:00"));
    assert_ok!(db.persist(&mut ann).await);
    assert_ok!(db.persist(&mut bob).await);

    assert_eq!(log.create_table_count(), 1);
    assert_eq!(
        log.sql()[..2],
        [
            "SELECT COUNT(name) FROM sqlite_master WHERE type = 'table' AND name = 'Users'",
            "CREATE TABLE Users (Id INTEGER PRIMARY KEY AUTOINCREMENT, \
             Username VARCHAR(100), Password VARCHAR(100), Age INTEGER, \
             RegistrationDate DATETIME)",
        ]
    );
}

#[tokio::test]
async fn table_exists_after_create() {
    let (db, _log) = setup(false);

    assert!(!assert_ok!(db.table_exists::<User>().await));
    assert_ok!(db.create_table::<User>().await);
    assert!(assert_ok!(db.table_exists::<User>().await));

    // Other tables are unaffected
    assert!(!assert_ok!(db.table_exists::<Profile>().await));
}

#[tokio::test]
async fn create_table_twice_fails() {
    let (db, _log) = setup(false);

    assert_ok!(db.create_table::<User>().await);
    assert_err!(db.create_table::<User>().await, is_driver_operation_failed);
}

#[tokio::test]
async fn missing_table_without_code_first() {
    let (db, log) = setup(false);
    assert!(!db.is_code_first());

    let mut ann = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    let err = assert_err!(db.persist(&mut ann).await, is_driver_operation_failed);

    assert!(err.to_string().contains("no such table"), "{err}");
    assert_eq!(log.create_table_count(), 0);
    assert_eq!(ann.id, 0);
}

#[tokio::test]
async fn key_column_is_declared_first() {
    let (db, mut log) = setup(false);

    assert_ok!(db.create_table::<Profile>().await);

    assert_eq!(
        log.pop_sql().as_deref(),
        Some(
            "CREATE TABLE Profile (id INTEGER PRIMARY KEY AUTOINCREMENT, \
             nickname VARCHAR(100), bio VARCHAR(100), verified BOOLEAN)"
        )
    );
}
