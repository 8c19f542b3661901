use super::{Flavor, Formatter, Params, ToSql};

use crate::stmt::ColumnDef;

impl ToSql for &ColumnDef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = &self.name;
        let ty = &self.ty;

        if !self.primary_key {
            fmt!(f, name " " ty);
            return;
        }

        match f.serializer.flavor {
            Flavor::SqlServer => fmt!(f, name " " ty " IDENTITY PRIMARY KEY"),
            // AUTOINCREMENT is only accepted on a column declared exactly `INTEGER`
            Flavor::Sqlite => fmt!(f, name " INTEGER PRIMARY KEY AUTOINCREMENT"),
        }
    }
}
