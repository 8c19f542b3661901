use tests::{
    models::{date, User},
    prelude::*,
    setup,
};

use minorm::Db;
use pretty_assertions::assert_eq;

async fn seed(db: &Db) -> Vec<User> {
    let mut users = vec![
        User::new("ann", "pw", 30, date("2024-03-01 08:30:00")),
        User::new("bob", "hunter2", 17, date("2024-03-02 09:00:00")),
        User::new("cat", "meow", 45, date("2024-03-03 10:15:30")),
    ];

    for user in &mut users {
        assert_ok!(db.persist(user).await);
    }

    users
}

#[tokio::test]
async fn find_all_without_predicate() {
    let (db, _log) = setup(true);
    let users = seed(&db).await;

    let loaded: Vec<User> = assert_ok!(db.find_all::<User>(None).await);
    assert_eq!(loaded, users);
}

#[tokio::test]
async fn find_all_with_predicate() {
    let (db, mut log) = setup(true);
    let users = seed(&db).await;
    log.clear();

    let adults: Vec<User> = assert_ok!(db.find_all::<User>(Some("Age > 18")).await);

    assert_eq!(adults, [users[0].clone(), users[2].clone()]);
    assert_eq!(log.sql(), ["SELECT * FROM Users WHERE Age > 18"]);
}

#[tokio::test]
async fn blank_predicate_is_ignored() {
    let (db, mut log) = setup(true);
    seed(&db).await;
    log.clear();

    let loaded: Vec<User> = assert_ok!(db.find_all::<User>(Some("   ")).await);

    assert_eq!(loaded.len(), 3);
    assert_eq!(log.pop_sql().as_deref(), Some("SELECT * FROM Users"));
}

#[tokio::test]
async fn find_all_on_empty_table() {
    let (db, _log) = setup(false);
    assert_ok!(db.create_table::<User>().await);

    let loaded: Vec<User> = assert_ok!(db.find_all::<User>(None).await);
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn find_by_id() {
    let (db, mut log) = setup(true);
    let users = seed(&db).await;
    log.clear();

    let bob: User = assert_ok!(db.find_by_id::<User>(users[1].id).await);

    assert_eq!(bob, users[1]);
    assert_eq!(log.sql(), ["SELECT * FROM Users WHERE [Id] = '2'"]);
}

#[tokio::test]
async fn find_by_id_not_found() {
    let (db, _log) = setup(true);
    seed(&db).await;

    let err = assert_err!(db.find_by_id::<User>(99).await, is_record_not_found);
    assert_eq!(err.to_string(), "record not found: table=Users; Id=99");
}

#[tokio::test]
async fn find_first() {
    let (db, mut log) = setup(true);
    let users = seed(&db).await;
    log.clear();

    let first = assert_ok!(db.find_first::<User>(None).await);
    assert_eq!(first.as_ref(), Some(&users[0]));

    let minor = assert_ok!(db.find_first::<User>(Some("Age < 18")).await);
    assert_eq!(minor.as_ref(), Some(&users[1]));

    assert_eq!(
        log.sql(),
        [
            "SELECT * FROM Users LIMIT 1",
            "SELECT * FROM Users WHERE Age < 18 LIMIT 1",
        ]
    );
}

#[tokio::test]
async fn find_first_without_match() {
    let (db, _log) = setup(true);
    seed(&db).await;

    assert_none!(assert_ok!(db.find_first::<User>(Some("Age > 100")).await));
}

#[tokio::test]
async fn invalid_predicate_surfaces_driver_error() {
    let (db, _log) = setup(true);
    seed(&db).await;

    assert_err!(
        db.find_all::<User>(Some("Nope >")).await,
        is_driver_operation_failed
    );
}
