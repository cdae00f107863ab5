use crate::{
    model::{enumeration::EnumModel, record::RecordModel},
    traits::FieldValue,
};
use std::fmt::{self, Debug, Display};

///
/// ScalarKind
///
/// Leaf scalar shapes a field can carry.
/// Integer and float widths are kept so ordering sentinels can pick the
/// minimum of the declared type rather than of the widened runtime value.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Bool,
    Date,
    DateTime,
    Decimal,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Text,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Ulid,
}

impl ScalarKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Decimal => "decimal",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Text => "text",
            Self::Uint8 => "u8",
            Self::Uint16 => "u16",
            Self::Uint32 => "u32",
            Self::Uint64 => "u64",
            Self::Ulid => "ulid",
        }
    }

}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// FieldKind
///
/// Element shape of a field, after unwrapping `Option` and one level of
/// collection. Enum and record kinds point at their model through a
/// function so recursive records can describe themselves.
///

#[derive(Clone, Copy)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Enum(fn() -> &'static EnumModel),
    Record(fn() -> &'static RecordModel),
}

impl FieldKind {
    #[must_use]
    pub const fn is_record(self) -> bool {
        matches!(self, Self::Record(_))
    }

    #[must_use]
    pub fn record_model(self) -> Option<&'static RecordModel> {
        match self {
            Self::Record(model) => Some(model()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Scalar(ScalarKind::Text))
    }
}

impl Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "Scalar({kind:?})"),
            Self::Enum(model) => write!(f, "Enum({})", model().name),
            Self::Record(model) => write!(f, "Record({})", model().name),
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => Display::fmt(kind, f),
            Self::Enum(model) => f.write_str(model().name),
            Self::Record(model) => f.write_str(model().name),
        }
    }
}

///
/// FieldModel
/// Runtime field metadata used by path resolution and compilation.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    /// Normalized field name as used in property paths.
    pub name: &'static str,
    /// Element shape.
    pub kind: FieldKind,
    /// The field (or its element) may be absent.
    pub nullable: bool,
    /// The field holds a collection of `kind`.
    pub collection: bool,
}

impl FieldModel {
    /// Describe a field of Rust type `T`.
    #[must_use]
    pub const fn new<T: FieldValue + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            kind: T::KIND,
            nullable: T::NULLABLE,
            collection: T::COLLECTION,
        }
    }
}
