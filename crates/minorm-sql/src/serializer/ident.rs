use super::{Formatter, Params, ToSql};

/// A bracket-quoted identifier: `[name]`.
///
/// Both SQL Server and SQLite accept brackets. A closing bracket inside the
/// name is doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push('[');
        f.dst.push_str(&self.0.as_ref().replace(']', "]]"));
        f.dst.push(']');
    }
}
