mod compare;
mod parse;
mod sentinel;

#[cfg(test)]
mod tests;

use chrono::{NaiveDate, NaiveDateTime};
use derive_more::Display;
use rust_decimal::Decimal;
use std::fmt;
use ulid::Ulid;

// re-exports
pub use compare::{canonical_cmp, strict_order_cmp};
pub use parse::{LiteralError, parse_literal};
pub use sentinel::sentinel;

///
/// Value
///
/// Runtime scalar read from a record field or parsed from a literal.
///
/// Null → the field's value is `Option::None`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Decimal(Decimal),
    Enum(EnumValue),
    Float32(f32),
    Float64(f64),
    Int(i64),
    Null,
    Text(String),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    // Stable rank used only when two different variants meet in one ordering.
    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Date(_) => 2,
            Self::DateTime(_) => 3,
            Self::Decimal(_) => 4,
            Self::Enum(_) => 5,
            Self::Float32(_) => 6,
            Self::Float64(_) => 7,
            Self::Int(_) => 8,
            Self::Text(_) => 9,
            Self::Uint(_) => 10,
            Self::Ulid(_) => 11,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Null => f.write_str("null"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Ulid(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float32,
    f64 => Float64,
    String => Text,
    Decimal => Decimal,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    Ulid => Ulid,
    EnumValue => Enum,
);

///
/// EnumValue
///
/// Runtime enum member: declared discriminant plus variant name.
/// Orders by discriminant, the way the enum itself would.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{variant}")]
pub struct EnumValue {
    pub discriminant: i64,
    pub variant: &'static str,
}

impl EnumValue {
    #[must_use]
    pub const fn new(discriminant: i64, variant: &'static str) -> Self {
        Self {
            discriminant,
            variant,
        }
    }
}
