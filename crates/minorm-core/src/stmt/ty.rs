/// The type of a [`Value`](super::Value), from minorm's point of view.
///
/// This is the application-level type of a model field. How a type is stored
/// in a given database is decided separately, by
/// [`db::Type::from_app`](crate::schema::db::Type::from_app).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
    Bytes,

    /// A civil date and time without a time zone.
    DateTime,
}
