use super::{Flavor, Formatter, Params, ToSql};

use minorm_core::schema::db;

impl ToSql for &db::Type {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let flavor = f.serializer.flavor;

        match (self, flavor) {
            (db::Type::Boolean, Flavor::SqlServer) => fmt!(f, "BIT"),
            (db::Type::Boolean, Flavor::Sqlite) => fmt!(f, "BOOLEAN"),
            (db::Type::Integer(_), Flavor::Sqlite) => fmt!(f, "INTEGER"),
            (db::Type::Integer(8), Flavor::SqlServer) => fmt!(f, "BIGINT"),
            (db::Type::Integer(_), Flavor::SqlServer) => fmt!(f, "INT"),
            (db::Type::VarChar(size), _) => {
                let size = *size;
                fmt!(f, "VARCHAR(" size ")");
            }
            (db::Type::DateTime, _) => fmt!(f, "DATETIME"),
        }
    }
}
