use crate::{driver, stmt};

/// Database-level storage types, as they appear in `CREATE TABLE`.
///
/// `stmt::Type` is how minorm sees a value; `db::Type` is how a database
/// stores it. The mapping between the two is fixed and small, see
/// [`Type::from_app`].
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// A civil date and time
    DateTime,
}

impl Type {
    /// Maps an application-level type to a database-level storage type.
    ///
    /// Returns `None` when the type has no storage mapping.
    pub fn from_app(ty: &stmt::Type, db: &driver::StorageTypes) -> Option<Type> {
        match ty {
            stmt::Type::Bool => Some(Type::Boolean),
            stmt::Type::I32 => Some(Type::Integer(4)),
            stmt::Type::I64 => Some(Type::Integer(8)),
            stmt::Type::String => Some(db.default_string_type.clone()),
            stmt::Type::DateTime => Some(Type::DateTime),
            stmt::Type::F64 | stmt::Type::Bytes => None,
        }
    }
}
