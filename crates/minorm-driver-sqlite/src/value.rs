use minorm_core::{
    stmt::{self, Value as CoreValue, DATETIME_FORMAT},
    Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core minorm value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads column `index` of `row` and converts it to `ty`.
    ///
    /// SQLite stores booleans as integers and dates as text, so the raw value
    /// is cast to the model's type.
    pub fn from_sql(row: &Row, index: usize, ty: &stmt::Type) -> Result<Self> {
        let value: SqlValue = row
            .get(index)
            .map_err(minorm_core::Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => CoreValue::I64(value),
            SqlValue::Real(value) => CoreValue::F64(value),
            SqlValue::Text(value) => CoreValue::String(value),
            SqlValue::Blob(value) => CoreValue::Bytes(value),
        };

        Ok(Value(core_value.cast(ty)?))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format(DATETIME_FORMAT).to_string(),
            ))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
