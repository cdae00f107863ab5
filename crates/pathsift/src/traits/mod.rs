use crate::{
    model::{EnumModel, FieldKind, RecordModel, ScalarKind},
    value::Value,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::{fmt, sync::Arc};
use ulid::Ulid;

// ============================================================================
// RECORD ACCESS
// ============================================================================
//
// Records expose their fields by normalized name. The static model says what
// a path may contain; `get_field` reads what one instance actually holds.
//

///
/// Record
///
/// Object-safe by-name field accessor, usually emitted by `#[derive(Record)]`.
///

pub trait Record {
    /// Read one field by its normalized (Pascal-cased) name.
    fn get_field(&self, field: &str) -> Option<FieldRef<'_>>;
}

///
/// RecordSchema
///
/// Static schema of a record type.
///

pub trait RecordSchema: Record {
    fn model() -> &'static RecordModel;
}

///
/// EnumSchema
///

pub trait EnumSchema {
    fn model() -> &'static EnumModel;
}

impl<T: Record + ?Sized> Record for &T {
    fn get_field(&self, field: &str) -> Option<FieldRef<'_>> {
        T::get_field(self, field)
    }
}

impl<T: RecordSchema + ?Sized> RecordSchema for &T {
    fn model() -> &'static RecordModel {
        T::model()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn get_field(&self, field: &str) -> Option<FieldRef<'_>> {
        T::get_field(self, field)
    }
}

impl<T: RecordSchema + ?Sized> RecordSchema for Box<T> {
    fn model() -> &'static RecordModel {
        T::model()
    }
}

impl<T: Record + ?Sized> Record for Arc<T> {
    fn get_field(&self, field: &str) -> Option<FieldRef<'_>> {
        T::get_field(self, field)
    }
}

impl<T: RecordSchema + ?Sized> RecordSchema for Arc<T> {
    fn model() -> &'static RecordModel {
        T::model()
    }
}

///
/// FieldRef
///
/// Borrowed view of one field of one record instance.
///
/// Nested records stay borrowed so path walks never clone whole records;
/// scalars are materialized into a `Value`.
///

pub enum FieldRef<'a> {
    Null,
    Value(Value),
    Record(&'a dyn Record),
    List(Vec<FieldRef<'a>>),
}

impl<'a> FieldRef<'a> {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The nested record, if this field holds one.
    #[must_use]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Self::Record(record) => Some(*record),
            _ => None,
        }
    }

    /// Collapse a leaf read into a value. Absent leaves become `Value::Null`.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Null | Self::Record(_) | Self::List(_) => Value::Null,
        }
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Record(_) => f.write_str("Record(..)"),
            Self::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

// ============================================================================
// FIELD VALUES
// ============================================================================

///
/// FieldValue
///
/// Static shape plus runtime read of one field type.
///
/// `KIND` is the element kind after unwrapping `Option` and `Vec`;
/// `NULLABLE` and `COLLECTION` record what was unwrapped.
///

pub trait FieldValue {
    const KIND: FieldKind;
    const NULLABLE: bool = false;
    const COLLECTION: bool = false;

    fn to_field(&self) -> FieldRef<'_>;
}

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = true;
    const COLLECTION: bool = T::COLLECTION;

    fn to_field(&self) -> FieldRef<'_> {
        self.as_ref().map_or(FieldRef::Null, FieldValue::to_field)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;
    const COLLECTION: bool = true;

    fn to_field(&self) -> FieldRef<'_> {
        FieldRef::List(self.iter().map(FieldValue::to_field).collect())
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;
    const COLLECTION: bool = T::COLLECTION;

    fn to_field(&self) -> FieldRef<'_> {
        T::to_field(self)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Arc<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;
    const COLLECTION: bool = T::COLLECTION;

    fn to_field(&self) -> FieldRef<'_> {
        T::to_field(self)
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Text);

    fn to_field(&self) -> FieldRef<'_> {
        FieldRef::Value(Value::Text(self.clone()))
    }
}

macro_rules! impl_field_value {
    ( $( $type:ty => $kind:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                const KIND: FieldKind = FieldKind::Scalar(ScalarKind::$kind);

                fn to_field(&self) -> FieldRef<'_> {
                    FieldRef::Value(Value::from(*self))
                }
            }
        )*
    };
}

impl_field_value!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    Decimal => Decimal,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    Ulid => Ulid,
);
