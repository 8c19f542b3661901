use tests::{
    models::{date, User},
    prelude::*,
};

use minorm::db::Config;

#[tokio::test]
async fn connect_from_config() {
    let config = Config {
        url: "sqlite::memory:".to_string(),
        code_first: true,
    };

    let db = assert_ok!(config.connect().await);
    assert!(db.is_code_first());
    assert_eq!(db.driver().url(), "sqlite::memory:");

    let mut ann = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    assert_ok!(db.persist(&mut ann).await);

    let users = assert_ok!(db.find_all::<User>(None).await);
    assert_eq!(users, [ann]);
}

#[tokio::test]
async fn connect_from_url() {
    let db = assert_ok!(minorm::Db::connect("sqlite::memory:").await);
    assert!(!db.is_code_first());
    assert!(!assert_ok!(db.table_exists::<User>().await));
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = assert_err!(
        Config::new("mysql://localhost/app").connect().await,
        is_invalid_connection_url
    );
    assert!(err.to_string().contains("scheme=mysql"), "{err}");
}

#[tokio::test]
async fn malformed_url() {
    assert_err!(
        Config::new("no scheme here").connect().await,
        is_invalid_connection_url
    );
}
