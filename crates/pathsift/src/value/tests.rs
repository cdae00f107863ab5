use super::*;
use crate::{
    model::{FieldKind, ScalarKind},
    test_fixtures::{DummyType, StepType},
    traits::EnumSchema,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use ulid::Ulid;

const ALL_SCALARS: [ScalarKind; 16] = [
    ScalarKind::Bool,
    ScalarKind::Date,
    ScalarKind::DateTime,
    ScalarKind::Decimal,
    ScalarKind::Float32,
    ScalarKind::Float64,
    ScalarKind::Int8,
    ScalarKind::Int16,
    ScalarKind::Int32,
    ScalarKind::Int64,
    ScalarKind::Text,
    ScalarKind::Uint8,
    ScalarKind::Uint16,
    ScalarKind::Uint32,
    ScalarKind::Uint64,
    ScalarKind::Ulid,
];

fn parse(kind: ScalarKind, literal: &str) -> Result<Value, LiteralError> {
    parse_literal(FieldKind::Scalar(kind), literal)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn datetime(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(h, m, s).expect("valid time")
}

//
// parse
//

#[test]
fn parses_numbers_per_declared_width() {
    assert_eq!(parse(ScalarKind::Int32, "34"), Ok(Value::Int(34)));
    assert_eq!(parse(ScalarKind::Int64, " -7 "), Ok(Value::Int(-7)));
    assert_eq!(parse(ScalarKind::Uint8, "255"), Ok(Value::Uint(255)));
    assert_eq!(parse(ScalarKind::Float64, "-1.98"), Ok(Value::Float64(-1.98)));
    assert_eq!(
        parse(ScalarKind::Decimal, "12.50"),
        Ok(Value::Decimal(Decimal::new(1250, 2)))
    );

    assert!(matches!(
        parse(ScalarKind::Uint8, "256"),
        Err(LiteralError::Malformed { expected: ScalarKind::Uint8, .. })
    ));
    assert!(parse(ScalarKind::Int16, "1.5").is_err());
    assert!(parse(ScalarKind::Uint32, "-1").is_err());
}

#[test]
fn parses_booleans_case_insensitively() {
    assert_eq!(parse(ScalarKind::Bool, "True"), Ok(Value::Bool(true)));
    assert_eq!(parse(ScalarKind::Bool, "FALSE"), Ok(Value::Bool(false)));
    assert!(parse(ScalarKind::Bool, "yes").is_err());
}

#[test]
fn text_is_taken_verbatim() {
    assert_eq!(parse(ScalarKind::Text, "  John "), Ok(Value::from("  John ")));
    assert_eq!(parse(ScalarKind::Text, ""), Ok(Value::from("")));
}

#[test]
fn parses_dates_and_datetimes() {
    let midnight = datetime(2016, 2, 12, 0, 0, 0);

    assert_eq!(parse(ScalarKind::Date, "2016-02-12"), Ok(Value::Date(date(2016, 2, 12))));
    assert_eq!(parse(ScalarKind::Date, "02/12/2016"), Ok(Value::Date(date(2016, 2, 12))));
    assert_eq!(
        parse(ScalarKind::Date, "02/12/2016 00:00:00"),
        Ok(Value::Date(date(2016, 2, 12)))
    );
    assert!(parse(ScalarKind::Date, "02/12/2016 10:30:00").is_err());

    assert_eq!(parse(ScalarKind::DateTime, "2016-02-12"), Ok(Value::DateTime(midnight)));
    assert_eq!(
        parse(ScalarKind::DateTime, "02/12/2016 00:00:00"),
        Ok(Value::DateTime(midnight))
    );
    assert_eq!(
        parse(ScalarKind::DateTime, "2016-02-12T10:30:00+02:00"),
        Ok(Value::DateTime(datetime(2016, 2, 12, 8, 30, 0)))
    );
    assert_eq!(
        parse(ScalarKind::DateTime, "2016-02-12 10:30:00"),
        Ok(Value::DateTime(datetime(2016, 2, 12, 10, 30, 0)))
    );
}

#[test]
fn parses_ulids() {
    let ulid = Ulid::from_parts(1_700_000_000_000, 42);

    assert_eq!(parse(ScalarKind::Ulid, &ulid.to_string()), Ok(Value::Ulid(ulid)));
    assert!(parse(ScalarKind::Ulid, "not-a-ulid").is_err());
}

#[test]
fn parses_enum_names_and_discriminants() {
    let kind = FieldKind::Enum(<DummyType as EnumSchema>::model);

    assert_eq!(
        parse_literal(kind, "Partial"),
        Ok(Value::Enum(EnumValue::new(2, "Partial")))
    );
    assert_eq!(
        parse_literal(kind, "1"),
        Ok(Value::Enum(EnumValue::new(1, "All")))
    );
    assert_eq!(
        parse_literal(kind, "PARTIAL"),
        Err(LiteralError::UnknownVariant {
            enum_name: "DummyType",
            literal: "PARTIAL".to_string(),
        })
    );
    assert_eq!(
        parse_literal(kind, " 9 "),
        Ok(Value::Enum(EnumValue::new(9, "")))
    );
    assert!(parse_literal(kind, "nine").is_err());
}

//
// compare
//

#[test]
fn null_orders_first() {
    assert_eq!(canonical_cmp(&Value::Null, &Value::Int(i64::MIN)), Ordering::Less);
    assert_eq!(canonical_cmp(&Value::Text(String::new()), &Value::Null), Ordering::Greater);
    assert_eq!(canonical_cmp(&Value::Null, &Value::Null), Ordering::Equal);
}

#[test]
fn same_variants_compare_naturally() {
    assert_eq!(canonical_cmp(&Value::Int(1), &Value::Int(30)), Ordering::Less);
    assert_eq!(canonical_cmp(&Value::from("abc"), &Value::from("xda")), Ordering::Less);
    assert_eq!(canonical_cmp(&Value::Bool(false), &Value::Bool(true)), Ordering::Less);
    assert_eq!(
        canonical_cmp(&Value::Float64(f64::NAN), &Value::Float64(f64::MIN)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Float64(f64::NAN), &Value::Float64(f64::NAN)),
        Ordering::Equal
    );
}

#[test]
fn enums_order_by_discriminant() {
    let question = Value::Enum(EnumValue::new(0, "Question"));
    let transition = Value::Enum(EnumValue::new(1, "Transition"));

    assert_eq!(canonical_cmp(&transition, &question), Ordering::Greater);
}

#[test]
fn mismatched_variants_have_no_strict_order() {
    assert_eq!(strict_order_cmp(&Value::Int(1), &Value::Uint(1)), None);
    assert_ne!(canonical_cmp(&Value::Int(1), &Value::Uint(1)), Ordering::Equal);
}

//
// sentinel
//

#[test]
fn signed_kinds_sort_absent_at_their_minimum() {
    assert_eq!(
        sentinel(FieldKind::Scalar(ScalarKind::Int32)),
        Value::Int(i64::from(i32::MIN))
    );
    assert_eq!(
        sentinel(FieldKind::Scalar(ScalarKind::Int16)),
        Value::Int(i64::from(i16::MIN))
    );
    assert_eq!(sentinel(FieldKind::Scalar(ScalarKind::Float32)), Value::Float32(f32::MIN));
    assert_eq!(sentinel(FieldKind::Scalar(ScalarKind::Decimal)), Value::Decimal(Decimal::MIN));
}

#[test]
fn other_kinds_sort_absent_at_zero() {
    assert_eq!(sentinel(FieldKind::Scalar(ScalarKind::Int8)), Value::Int(0));
    assert_eq!(sentinel(FieldKind::Scalar(ScalarKind::Uint64)), Value::Uint(0));
    assert_eq!(sentinel(FieldKind::Scalar(ScalarKind::Bool)), Value::Bool(false));
    assert_eq!(sentinel(FieldKind::Scalar(ScalarKind::Text)), Value::from(""));
    assert_eq!(
        sentinel(FieldKind::Scalar(ScalarKind::Date)),
        Value::Date(date(1970, 1, 1))
    );
    assert_eq!(
        sentinel(FieldKind::Scalar(ScalarKind::DateTime)),
        Value::DateTime(datetime(1970, 1, 1, 0, 0, 0))
    );
    assert_eq!(sentinel(FieldKind::Scalar(ScalarKind::Ulid)), Value::Ulid(Ulid::nil()));
    assert_eq!(
        sentinel(FieldKind::Enum(<StepType as EnumSchema>::model)),
        Value::Enum(EnumValue::new(0, "Question"))
    );
}

#[test]
fn scalar_sentinels_order_after_null() {
    for kind in ALL_SCALARS {
        let value = sentinel(FieldKind::Scalar(kind));

        assert!(!value.is_null(), "kind = {kind}");
        assert_eq!(canonical_cmp(&Value::Null, &value), Ordering::Less, "kind = {kind}");
    }
}
