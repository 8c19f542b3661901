use super::{Formatter, Params, ToSql};

/// Comma delimited, with a space after each comma
pub(super) struct Comma<L>(pub(super) L);

/// Comma delimited, without spaces
pub(super) struct Packed<L>(pub(super) L);

fn delimited<L, P>(list: L, sep: &'static str, f: &mut Formatter<'_, P>)
where
    L: IntoIterator,
    L::Item: ToSql,
    P: Params,
{
    let mut s = "";
    for i in list {
        fmt!(f, s i);
        s = sep;
    }
}

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        delimited(self.0, ", ", f);
    }
}

impl<L> ToSql for Packed<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        delimited(self.0, ",", f);
    }
}
