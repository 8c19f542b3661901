use super::{value::Bind, Comma, Flavor, Formatter, Ident, Packed, Params, ToSql};

use crate::stmt::{
    Assignment, CreateTable, Insert, Returning, Select, Statement, TableExists, Update, Value,
};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::TableExists(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = &self.name;
        fmt!(f, "CREATE TABLE " name " (" Comma(&self.columns) ")");
    }
}

impl ToSql for &TableExists {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = Value::from(self.name.as_str());

        match f.serializer.flavor {
            Flavor::SqlServer => fmt!(
                f,
                "SELECT COUNT(name) FROM sys.sysobjects WHERE [Name] = " Bind(&name) " AND [xtype] = 'U'"
            ),
            Flavor::Sqlite => fmt!(
                f,
                "SELECT COUNT(name) FROM sqlite_master WHERE type = 'table' AND name = " Bind(&name)
            ),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = &self.table;

        // A key-only row has nothing to list; `()` is a syntax error.
        if self.columns.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            return;
        }

        let columns = Packed(self.columns.iter().map(Ident));
        let values = Packed(self.values.iter().map(Bind));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let flavor = f.serializer.flavor;

        let top = match (flavor, self.limit) {
            (Flavor::SqlServer, Some(limit)) => Some(("TOP ", limit, " ")),
            _ => None,
        };
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        let limit = match (flavor, self.limit) {
            (Flavor::Sqlite, Some(limit)) => Some((" LIMIT ", limit)),
            _ => None,
        };

        let returning = &self.returning;
        let table = &self.table;
        fmt!(f, "SELECT " top returning " FROM " table filter limit);
    }
}

impl ToSql for &Returning {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Returning::Star => fmt!(f, "*"),
            Returning::Max(column) => fmt!(f, "MAX(" column ")"),
        }
    }
}

impl ToSql for &Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = &self.table;
        let filter = &self.filter;
        fmt!(f, "UPDATE " table " SET " Comma(&self.assignments) " WHERE " filter);
    }
}

impl ToSql for &Assignment {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(&self.column) " = " Bind(&self.value));
    }
}

impl<A: ToSql, B: ToSql> ToSql for (A, B) {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.0 self.1);
    }
}

impl<A: ToSql, B: ToSql, C: ToSql> ToSql for (A, B, C) {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.0 self.1 self.2);
    }
}
