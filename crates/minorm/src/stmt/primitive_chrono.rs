use crate::stmt::Primitive;
use chrono::NaiveDateTime;
use minorm_core::{
    stmt::{Type, Value},
    Result,
};

impl Primitive for NaiveDateTime {
    const TYPE: Type = Type::DateTime;

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}
