use super::{value::Bind, Formatter, Ident, Params, ToSql};

use minorm_core::stmt::Filter;

impl ToSql for &Filter {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Filter::Sql(predicate) => fmt!(f, predicate),
            Filter::Eq { column, value } => fmt!(f, Ident(column) " = " Bind(value)),
        }
    }
}
