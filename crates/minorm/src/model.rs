use crate::{schema, Result};

use minorm_core::stmt::{Value, ValueRecord};

/// A struct persisted as one row of one table.
///
/// Implemented with `#[derive(Model)]`.
pub trait Model: Sized + Send {
    /// The Rust name of the model.
    const NAME: &'static str;

    /// Declarative metadata: table override and fields in declaration order.
    fn schema() -> schema::Model;

    /// Load an instance of the model from a result row.
    ///
    /// The row lists the identifier first, then the other fields in
    /// declaration order.
    fn load(record: ValueRecord) -> Result<Self>;

    /// The current value of every field, in declaration order.
    fn record(&self) -> ValueRecord;

    /// Sets the field at declaration index `field`.
    fn assign(&mut self, field: usize, value: Value) -> Result<()>;
}
