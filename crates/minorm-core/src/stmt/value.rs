use super::Type;
use crate::{Error, Result};

use chrono::NaiveDateTime;

/// Textual format used to store and render date-time values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single column value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    DateTime(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type of the value, or `None` for `Null`.
    pub fn infer_ty(&self) -> Option<Type> {
        Some(match self {
            Value::Null => return None,
            Value::Bool(_) => Type::Bool,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::F64(_) => Type::F64,
            Value::String(_) => Type::String,
            Value::Bytes(_) => Type::Bytes,
            Value::DateTime(_) => Type::DateTime,
        })
    }

    /// Widens integer values to `i64`. Any other value returns `None`.
    pub fn to_i64(&self) -> Option<i64> {
        match *self {
            Value::I32(v) => Some(v as i64),
            Value::I64(v) => Some(v),
            _ => None,
        }
    }

    /// Converts the value to `ty`, the way drivers coerce loosely typed
    /// storage (integers for booleans, text for dates) back into the
    /// model's field type.
    pub fn cast(self, ty: &Type) -> Result<Value> {
        use Value::*;

        Ok(match (self, ty) {
            (Null, _) => Null,
            (Bool(v), Type::Bool) => Bool(v),
            (I32(v), Type::Bool) => Bool(v != 0),
            (I64(v), Type::Bool) => Bool(v != 0),
            (value @ (I32(_) | I64(_)), Type::I32) => I32(value.try_into()?),
            (value @ (I32(_) | I64(_)), Type::I64) => I64(value.try_into()?),
            (I32(v), Type::F64) => F64(v as f64),
            (I64(v), Type::F64) => F64(v as f64),
            (F64(v), Type::F64) => F64(v),
            (String(v), Type::String) => String(v),
            (String(v), Type::DateTime) => DateTime(NaiveDateTime::parse_from_str(
                &v,
                DATETIME_FORMAT,
            )?),
            (DateTime(v), Type::DateTime) => DateTime(v),
            (DateTime(v), Type::String) => String(v.format(DATETIME_FORMAT).to_string()),
            (Bytes(v), Type::Bytes) => Bytes(v),
            (value, _) => return Err(Error::type_conversion(value, type_name(ty))),
        })
    }
}

fn type_name(ty: &Type) -> &'static str {
    match ty {
        Type::Bool => "bool",
        Type::I32 => "i32",
        Type::I64 => "i64",
        Type::F64 => "f64",
        Type::String => "String",
        Type::Bytes => "Vec<u8>",
        Type::DateTime => "NaiveDateTime",
    }
}

macro_rules! impl_from {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Value {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    NaiveDateTime => DateTime,
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Value {
        Value::String(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Value {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => {
                i32::try_from(v).map_err(|_| Error::type_conversion(Value::I64(v), "i32"))
            }
            value => Err(Error::type_conversion(value, "i32")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v as i64),
            Value::I64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::String(v) => Ok(NaiveDateTime::parse_from_str(&v, DATETIME_FORMAT)?),
            value => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}
