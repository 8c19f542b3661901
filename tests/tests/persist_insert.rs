use tests::{
    models::{date, User},
    prelude::*,
    setup,
};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn insert_then_read_back_key() {
    let (db, mut log) = setup(false);
    assert_ok!(db.create_table::<User>().await);
    log.clear();

    let mut ann = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    assert!(assert_ok!(db.persist(&mut ann).await));

    assert_eq!(ann.id, 1);
    assert_eq!(
        log.sql(),
        [
            "INSERT INTO Users ([Username],[Password],[Age],[RegistrationDate]) \
             VALUES ('ann','pw','30','2024-03-01 08:30:00')",
            "SELECT MAX(Id) FROM Users",
        ]
    );
}

#[tokio::test]
async fn keys_increase_per_insert() {
    let (db, _log) = setup(true);

    let mut ann = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    let mut bob = User::new("bob", "hunter2", 41, date("2024-03-02 09:00:00"));

    assert_ok!(db.persist(&mut ann).await);
    assert_ok!(db.persist(&mut bob).await);

    assert_eq!((ann.id, bob.id), (1, 2));

    let loaded: User = assert_ok!(db.find_by_id::<User>(2).await);
    assert_eq!(loaded, bob);
}

#[tokio::test]
async fn negative_key_means_insert() {
    let (db, mut log) = setup(true);

    let mut ann = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    ann.id = -5;
    assert_ok!(db.persist(&mut ann).await);

    assert_eq!(ann.id, 1);
    assert!(log.sql().iter().any(|sql| sql.starts_with("INSERT INTO Users")));
    log.clear();
}

#[tokio::test]
async fn persist_none_does_nothing() {
    let (db, log) = setup(true);

    let persisted = assert_ok!(db.persist::<User>(None).await);

    assert!(!persisted);
    assert!(log.is_empty());
}

#[tokio::test]
async fn text_is_stored_verbatim() {
    let (db, _log) = setup(true);

    let mut user = User::new("o'brien", "it's", 52, date("2023-12-31 23:59:59"));
    assert_ok!(db.persist(&mut user).await);

    let loaded: User = assert_ok!(db.find_by_id::<User>(user.id).await);
    assert_eq!(loaded.username, "o'brien");
    assert_eq!(loaded.password, "it's");
    assert_eq!(loaded.registration_date, date("2023-12-31 23:59:59"));
}

#[tokio::test]
async fn key_only_model_uses_default_values() {
    #[derive(Debug, minorm::Model)]
    struct Tag {
        #[key]
        id: i32,
    }

    let (db, mut log) = setup(true);

    let mut first = Tag { id: 0 };
    let mut second = Tag { id: 0 };
    assert!(assert_ok!(db.persist(&mut first).await));
    log.clear();
    assert!(assert_ok!(db.persist(&mut second).await));

    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(
        log.sql(),
        [
            "SELECT COUNT(name) FROM sqlite_master WHERE type = 'table' AND name = 'Tag'",
            "INSERT INTO Tag DEFAULT VALUES",
            "SELECT MAX(id) FROM Tag",
        ]
    );
}
