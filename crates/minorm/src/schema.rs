mod field;
pub use field::Field;

mod model;
pub use model::Model;

pub use minorm_core::schema::*;
