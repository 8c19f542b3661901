//! Models shared by the integration tests.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, minorm::Model)]
#[table = "Users"]
pub struct User {
    #[key]
    #[column("Id")]
    pub id: i32,

    #[column("Username")]
    pub username: String,

    #[column("Password")]
    pub password: String,

    #[column("Age")]
    pub age: i32,

    #[column("RegistrationDate")]
    pub registration_date: NaiveDateTime,
}

impl User {
    pub fn new(username: &str, password: &str, age: i32, registration_date: NaiveDateTime) -> User {
        User {
            id: 0,
            username: username.to_string(),
            password: password.to_string(),
            age,
            registration_date,
        }
    }
}

/// A model with optional fields, to exercise sparse updates.
#[derive(Debug, Clone, PartialEq, minorm::Model)]
pub struct Profile {
    pub nickname: Option<String>,

    #[key]
    pub id: Option<i64>,

    pub bio: Option<String>,

    pub verified: bool,
}

pub fn date(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("invalid test date")
}
