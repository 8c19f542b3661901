use tests::{
    models::{date, Profile, User},
    prelude::*,
    setup,
};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn update_by_key() {
    let (db, mut log) = setup(true);

    let mut ann = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    assert_ok!(db.persist(&mut ann).await);
    log.clear();

    ann.age = 31;
    ann.password = "new-pw".to_string();
    assert!(assert_ok!(db.persist(&mut ann).await));

    assert_eq!(
        log.sql(),
        [
            "SELECT COUNT(name) FROM sqlite_master WHERE type = 'table' AND name = 'Users'",
            "UPDATE Users SET [Username] = 'ann', [Password] = 'new-pw', [Age] = '31', \
             [RegistrationDate] = '2024-03-01 08:30:00' WHERE [Id] = '1'",
        ]
    );

    let loaded: User = assert_ok!(db.find_by_id::<User>(1).await);
    assert_eq!(loaded, ann);
}

#[tokio::test]
async fn update_of_missing_row_reports_nothing_affected() {
    let (db, _log) = setup(true);

    let mut ghost = User::new("ghost", "pw", 99, date("2024-01-01 00:00:00"));
    ghost.id = 42;

    assert!(!assert_ok!(db.persist(&mut ghost).await));
    assert_eq!(ghost.id, 42);
}

#[tokio::test]
async fn null_fields_are_skipped() {
    let (db, mut log) = setup(true);

    let mut profile = Profile {
        nickname: Some("annie".to_string()),
        id: None,
        bio: Some("likes tea".to_string()),
        verified: false,
    };
    assert_ok!(db.persist(&mut profile).await);
    assert_eq!(profile.id, Some(1));
    log.clear();

    profile.bio = None;
    profile.verified = true;
    assert_ok!(db.persist(&mut profile).await);

    assert_eq!(
        log.sql().last().map(String::as_str),
        Some("UPDATE Profile SET [nickname] = 'annie', [verified] = '1' WHERE [id] = '1'")
    );

    // The skipped column keeps its stored value.
    let loaded: Profile = assert_ok!(db.find_by_id::<Profile>(1i64).await);
    assert_eq!(loaded.bio.as_deref(), Some("likes tea"));
    assert!(loaded.verified);
}

#[tokio::test]
async fn update_with_only_nulls_fails() {
    #[derive(Debug, minorm::Model)]
    struct Note {
        #[key]
        id: i32,

        body: Option<String>,
    }

    let (db, _log) = setup(true);

    let mut note = Note {
        id: 0,
        body: Some("first".to_string()),
    };
    assert_ok!(db.persist(&mut note).await);

    note.body = None;
    let err = assert_err!(db.persist(&mut note).await, is_unrenderable_value);
    assert_eq!(
        err.to_string(),
        "unrenderable value: no non-null column to update in `Note`"
    );
}

#[tokio::test]
async fn insert_with_null_field_fails() {
    let (db, log) = setup(true);

    let mut profile = Profile {
        nickname: None,
        id: None,
        bio: Some("likes tea".to_string()),
        verified: false,
    };

    let err = assert_err!(db.persist(&mut profile).await, is_unrenderable_value);
    assert_eq!(err.to_string(), "unrenderable value: `Profile.nickname` is null");
    assert_eq!(profile.id, None);
    assert_eq!(log.create_table_count(), 1);
}
