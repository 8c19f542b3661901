use minorm_core::schema::db;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name
    pub name: String,

    /// Column storage type
    pub ty: db::Type,

    /// True for the auto-incremented integer primary key
    pub primary_key: bool,
}
