use super::{Column, ColumnId};

/// A database table, resolved from a model's declarative metadata.
///
/// `columns` follow field-declaration order and include the primary key.
/// Rows read back with `SELECT *` are laid out differently: the primary key
/// comes first, followed by [`Table::data_columns`]. See
/// [`Table::row_columns`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    /// The identifier column
    pub primary_key: ColumnId,
}

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().0]
    }

    pub fn primary_key_column(&self) -> &Column {
        self.column(self.primary_key)
    }

    /// Every column except the primary key, in declaration order.
    pub fn data_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        let pk = self.primary_key;
        self.columns.iter().filter(move |column| column.id != pk)
    }

    /// Columns in result-row order: the primary key, then the data columns.
    pub fn row_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        std::iter::once(self.primary_key_column()).chain(self.data_columns())
    }
}
