use super::{Formatter, Params, ToSql};

use minorm_core::stmt::{Value, DATETIME_FORMAT};

/// A statement value. Written as a placeholder, or as a literal when the
/// formatter is inlining.
pub(super) struct Bind<'a>(pub(super) &'a Value);

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if f.inline {
            Literal(self.0).to_sql(f);
        } else {
            let placeholder = f.params.push(self.0);
            placeholder.to_sql(f);
        }
    }
}

/// Every non-null literal is single-quoted, numbers included. The database
/// converts the text to the column's type.
struct Literal<'a>(&'a Value);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let text = match self.0 {
            Value::Null => {
                f.dst.push_str("NULL");
                return;
            }
            Value::Bytes(bytes) => {
                f.dst.push_str("0x");
                for byte in bytes {
                    f.dst.push_str(&format!("{byte:02X}"));
                }
                return;
            }
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => "0".to_string(),
            Value::I32(v) => v.to_string(),
            Value::I64(v) => v.to_string(),
            Value::F64(v) => v.to_string(),
            Value::String(v) => v.replace('\'', "''"),
            Value::DateTime(v) => v.format(DATETIME_FORMAT).to_string(),
        };

        f.dst.push('\'');
        f.dst.push_str(&text);
        f.dst.push('\'');
    }
}
