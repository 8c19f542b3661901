#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Packed};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod filter;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use minorm_core::stmt::Value;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// When true, values are written as quoted literals instead of
    /// placeholders.
    inline: bool,
}

impl Serializer {
    /// Serializes `stmt`, pushing every value to `params` and writing a
    /// placeholder in its place.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        self.serialize_with(stmt, params, false)
    }

    /// Serializes `stmt` with every value written as a quoted literal.
    ///
    /// The output is meant for logs and for comparing against expected
    /// statement text. Drivers execute the output of [`serialize`] instead.
    ///
    /// [`serialize`]: Serializer::serialize
    pub fn serialize_inline(&self, stmt: &Statement) -> String {
        let mut unused = Vec::<Value>::new();
        self.serialize_with(stmt, &mut unused, true)
    }

    fn serialize_with(&self, stmt: &Statement, params: &mut impl Params, inline: bool) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            inline,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
