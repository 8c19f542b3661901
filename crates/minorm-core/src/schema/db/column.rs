use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Position of the column within its table, in field-declaration order.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The name of the model field mapped to this column.
    pub field: String,

    /// The column type, from minorm's point of view.
    pub ty: stmt::Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is the table's primary key
    pub primary_key: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId(pub usize);

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}
