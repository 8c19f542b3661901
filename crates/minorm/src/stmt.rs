mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

pub use minorm_core::stmt::*;
