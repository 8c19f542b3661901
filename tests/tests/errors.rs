use tests::{
    models::{date, User},
    prelude::*,
    setup,
};

use minorm::{schema, stmt::Primitive, Model, Result};
use minorm_core::stmt::{Type, Value, ValueRecord};
use pretty_assertions::assert_eq;

/// A model without an identifier, implemented by hand since the derive
/// rejects it.
#[derive(Debug)]
struct Session {
    token: String,
}

impl Model for Session {
    const NAME: &'static str = "Session";

    fn schema() -> schema::Model {
        schema::Model {
            name: "Session".to_string(),
            table: None,
            fields: vec![schema::Field {
                name: "token".to_string(),
                column: None,
                ty: Type::String,
                nullable: false,
                primary_key: false,
            }],
        }
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Session {
            token: String::load(record.take(0))?,
        })
    }

    fn record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![self.token.to_value()])
    }

    fn assign(&mut self, _field: usize, _value: Value) -> Result<()> {
        Ok(())
    }
}

/// A hand-written model whose record leaves out its key.
#[derive(Debug)]
struct Label {
    name: String,
}

impl Model for Label {
    const NAME: &'static str = "Label";

    fn schema() -> schema::Model {
        let field = |name: &str, ty, primary_key| schema::Field {
            name: name.to_string(),
            column: None,
            ty,
            nullable: false,
            primary_key,
        };

        schema::Model {
            name: "Label".to_string(),
            table: None,
            fields: vec![field("name", Type::String, false), field("id", Type::I32, true)],
        }
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Label {
            name: String::load(record.take(1))?,
        })
    }

    fn record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![self.name.to_value()])
    }

    fn assign(&mut self, _field: usize, _value: Value) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, minorm::Model)]
struct Measurement {
    #[key]
    id: i32,

    reading: f64,
}

#[tokio::test]
async fn missing_key_is_reported_before_any_sql() {
    let (db, log) = setup(true);

    let err = assert_err!(db.find_all::<Session>(None).await, is_missing_primary_key);
    assert_eq!(
        err.to_string(),
        "missing primary key: model `Session` has no field marked as the identifier"
    );

    let mut session = Session {
        token: "abc".to_string(),
    };
    assert_err!(db.persist(&mut session).await, is_missing_primary_key);
    assert_err!(db.find_by_id::<Session>(1).await, is_missing_primary_key);
    assert_err!(db.create_table::<Session>().await, is_missing_primary_key);

    assert!(log.is_empty());
}

#[tokio::test]
async fn short_record_is_rejected_before_any_sql() {
    let (db, log) = setup(true);

    let mut label = Label {
        name: "urgent".to_string(),
    };
    let err = assert_err!(db.persist(&mut label).await, is_invalid_record);
    assert_eq!(
        err.to_string(),
        "invalid record: `Label` expects 2 columns, row has 1"
    );

    assert!(log.is_empty());
}

#[tokio::test]
async fn float_columns_cannot_be_created() {
    let (db, _log) = setup(false);

    let err = assert_err!(db.create_table::<Measurement>().await, is_unsupported_type);
    assert!(err.to_string().contains("Measurement.reading"), "{err}");
}

#[test]
fn assign_unknown_field() {
    let mut user = User::new("ann", "pw", 30, date("2024-03-01 08:30:00"));
    assert_err!(user.assign(9, Value::I32(1)), is_field_not_found);
}

#[test]
fn load_wrong_width() {
    let record = ValueRecord::from_vec(vec![Value::I32(1), Value::from("ann")]);
    assert_err!(User::load(record), is_invalid_record);
}

#[test]
fn load_wrong_type() {
    let record = ValueRecord::from_vec(vec![
        Value::from("not a number"),
        Value::from("ann"),
        Value::from("pw"),
        Value::I32(30),
        Value::from("2024-03-01 08:30:00"),
    ]);
    assert_err!(User::load(record), is_type_conversion);
}
