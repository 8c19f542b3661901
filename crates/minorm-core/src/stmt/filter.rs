use super::Value;

/// A `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// A caller-supplied SQL fragment, emitted verbatim.
    ///
    /// The fragment is not escaped or validated. Callers must not build it
    /// from untrusted input.
    Sql(String),

    /// `column = value`, with the value bound as a parameter.
    Eq { column: String, value: Value },
}

impl Filter {
    /// Builds a verbatim filter, or `None` if the fragment is blank.
    pub fn sql(predicate: &str) -> Option<Filter> {
        let predicate = predicate.trim();
        (!predicate.is_empty()).then(|| Filter::Sql(predicate.to_string()))
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::Eq {
            column: column.into(),
            value: value.into(),
        }
    }
}
