use crate::{
    model::{FieldKind, ScalarKind},
    value::Value,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use ulid::Ulid;

///
/// Stand-in ordering key for a leaf whose parent record is absent.
///
/// Signed numeric kinds use the minimum of the declared type so absent
/// chains always land at the low end; everything else uses its zero value.
///
#[must_use]
pub fn sentinel(kind: FieldKind) -> Value {
    match kind {
        FieldKind::Scalar(scalar) => scalar_sentinel(scalar),
        FieldKind::Enum(model) => Value::Enum(model().zero()),
        // Record leaves never reach ordering; resolution appends their Id.
        FieldKind::Record(_) => Value::Null,
    }
}

fn scalar_sentinel(kind: ScalarKind) -> Value {
    match kind {
        ScalarKind::Int16 => Value::Int(i64::from(i16::MIN)),
        ScalarKind::Int32 => Value::Int(i64::from(i32::MIN)),
        ScalarKind::Int64 => Value::Int(i64::MIN),
        ScalarKind::Float32 => Value::Float32(f32::MIN),
        ScalarKind::Float64 => Value::Float64(f64::MIN),
        ScalarKind::Decimal => Value::Decimal(Decimal::MIN),

        ScalarKind::Bool => Value::Bool(false),
        ScalarKind::Date => Value::Date(NaiveDate::default()),
        ScalarKind::DateTime => Value::DateTime(NaiveDateTime::default()),
        ScalarKind::Int8 => Value::Int(0),
        ScalarKind::Text => Value::Text(String::new()),
        ScalarKind::Uint8 | ScalarKind::Uint16 | ScalarKind::Uint32 | ScalarKind::Uint64 => {
            Value::Uint(0)
        }
        ScalarKind::Ulid => Value::Ulid(Ulid::nil()),
    }
}
