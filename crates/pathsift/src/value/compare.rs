use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used by the sort stage.
///
/// Ordering rules:
/// 1. `Null` orders before every other value
/// 2. Same-variant values compare naturally (NaN before any number)
/// 3. Mixed variants fall back to a fixed variant rank
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => strict_order_cmp(left, right).unwrap_or_else(|| left.rank().cmp(&right.rank())),
    }
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched variants.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
        (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
        (Value::Enum(a), Value::Enum(b)) => Some(
            a.discriminant
                .cmp(&b.discriminant)
                .then_with(|| a.variant.cmp(b.variant)),
        ),
        (Value::Float32(a), Value::Float32(b)) => Some(float_cmp(f64::from(*a), f64::from(*b))),
        (Value::Float64(a), Value::Float64(b)) => Some(float_cmp(*a, *b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Ulid(a), Value::Ulid(b)) => Some(a.cmp(b)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

// NaN sorts below every number and equal to itself.
fn float_cmp(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right)
        .unwrap_or_else(|| left.is_nan().cmp(&right.is_nan()).reverse())
}
