use crate::{
    model::{EnumModel, FieldKind, ScalarKind},
    value::{EnumValue, Value},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error as ThisError;
use ulid::Ulid;

// Accepted textual date forms, ISO first, then the invariant-culture
// month/day/year form produced by most grid and form serializers.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
];

///
/// LiteralError
///
/// A literal that cannot be converted to the leaf type of a resolved path.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LiteralError {
    #[error("'{literal}' is not a valid {expected}")]
    Malformed {
        expected: ScalarKind,
        literal: String,
    },

    #[error("'{literal}' is not a member of enum {enum_name}")]
    UnknownVariant {
        enum_name: &'static str,
        literal: String,
    },

    #[error("record {record} cannot be compared against a literal")]
    NotComparable { record: &'static str },
}

///
/// Convert a literal string into a value of the given field kind.
///
/// Non-text literals are trimmed first. Enum literals match a variant name
/// exactly, or are read as any integer discriminant.
///
pub fn parse_literal(kind: FieldKind, literal: &str) -> Result<Value, LiteralError> {
    match kind {
        FieldKind::Scalar(scalar) => parse_scalar(scalar, literal),
        FieldKind::Enum(model) => parse_enum(model(), literal),
        FieldKind::Record(model) => Err(LiteralError::NotComparable {
            record: model().name,
        }),
    }
}

fn parse_scalar(kind: ScalarKind, literal: &str) -> Result<Value, LiteralError> {
    let trimmed = literal.trim();
    let parsed = match kind {
        ScalarKind::Text => Some(Value::Text(literal.to_string())),
        ScalarKind::Bool => parse_bool(trimmed).map(Value::Bool),
        ScalarKind::Date => parse_date(trimmed).map(Value::Date),
        ScalarKind::DateTime => parse_datetime(trimmed).map(Value::DateTime),
        ScalarKind::Decimal => Decimal::from_str(trimmed).ok().map(Value::Decimal),
        ScalarKind::Float32 => trimmed.parse::<f32>().ok().map(Value::Float32),
        ScalarKind::Float64 => trimmed.parse::<f64>().ok().map(Value::Float64),
        ScalarKind::Int8 => trimmed.parse::<i8>().ok().map(Value::from),
        ScalarKind::Int16 => trimmed.parse::<i16>().ok().map(Value::from),
        ScalarKind::Int32 => trimmed.parse::<i32>().ok().map(Value::from),
        ScalarKind::Int64 => trimmed.parse::<i64>().ok().map(Value::from),
        ScalarKind::Uint8 => trimmed.parse::<u8>().ok().map(Value::from),
        ScalarKind::Uint16 => trimmed.parse::<u16>().ok().map(Value::from),
        ScalarKind::Uint32 => trimmed.parse::<u32>().ok().map(Value::from),
        ScalarKind::Uint64 => trimmed.parse::<u64>().ok().map(Value::from),
        ScalarKind::Ulid => Ulid::from_string(trimmed).ok().map(Value::Ulid),
    };

    parsed.ok_or_else(|| LiteralError::Malformed {
        expected: kind,
        literal: literal.to_string(),
    })
}

fn parse_enum(model: &'static EnumModel, literal: &str) -> Result<Value, LiteralError> {
    let trimmed = literal.trim();

    model
        .variant(trimmed)
        .or_else(|| {
            // undeclared discriminants convert but match no record
            trimmed.parse::<i64>().ok().map(|discriminant| {
                model
                    .variant_by_discriminant(discriminant)
                    .unwrap_or(EnumValue::new(discriminant, ""))
            })
        })
        .map(Value::Enum)
        .ok_or_else(|| LiteralError::UnknownVariant {
            enum_name: model.name,
            literal: literal.to_string(),
        })
}

fn parse_bool(literal: &str) -> Option<bool> {
    if literal.eq_ignore_ascii_case("true") {
        Some(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// Dates also accept a datetime literal, provided it sits exactly on midnight.
fn parse_date(literal: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(literal, format).ok())
        .or_else(|| {
            parse_datetime(literal)
                .filter(|datetime| datetime.date().and_hms_opt(0, 0, 0) == Some(*datetime))
                .map(|datetime| datetime.date())
        })
}

fn parse_datetime(literal: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(literal) {
        return Some(datetime.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(literal, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(literal, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
