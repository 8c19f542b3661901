mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Returning, Select};

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::{Value, DATETIME_FORMAT};

mod value_record;
pub use value_record::ValueRecord;
