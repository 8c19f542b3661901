pub mod db;
pub use db::Db;

pub mod driver;

mod model;
pub use model::Model;

pub mod schema;

pub mod stmt;

pub use minorm_macros::Model;

pub use minorm_core::{Error, Result};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{self, Primitive},
        Error, Model, Result,
    };
    pub use minorm_core::stmt::{Type, Value, ValueRecord};

    pub mod schema {
        pub use crate::schema::{Field, Model};
    }
}
