use crate::Result;

use minorm_core::stmt;

/// A Rust type that maps to a single column.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl Primitive for $ty {
                const TYPE: stmt::Type = stmt::Type::$variant;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> stmt::Value {
                    self.clone().into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }
}
