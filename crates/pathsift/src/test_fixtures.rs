//! Shared record fixtures for in-crate tests.

use crate::{FieldEnum, Record};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

///
/// DummyType
///

#[derive(Clone, Copy, Debug, Default, Eq, FieldEnum, PartialEq)]
pub enum DummyType {
    #[default]
    None,
    All,
    Partial,
}

///
/// DummyData
///
/// Filtering fixture: scalars, an enum, a nullable number, a nested record,
/// a nested record without `Id`, and collections of both.
///

#[derive(Clone, Debug, Default, Record)]
pub struct DummyData {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub is_active: bool,
    pub r#type: DummyType,
    pub created: NaiveDateTime,
    pub number_of: Option<i32>,
    pub data: Option<Box<DummyData>>,
    pub without_id: Option<WithoutId>,
    pub datas: Option<Vec<DummyData>>,
    pub data_without_id: Option<Vec<WithoutId>>,
}

impl DummyData {
    /// A populated record in the style of a generated test list: every field
    /// derived from `id`, nested records and collections left empty.
    pub fn numbered(id: i32) -> Self {
        Self {
            id,
            name: format!("Name{id}"),
            amount: f64::from(id) * 1.5,
            is_active: id % 2 == 0,
            r#type: DummyType::All,
            created: created_on(id),
            number_of: Some(id),
            ..Self::default()
        }
    }

    /// `count` numbered records, ids starting at 1.
    pub fn list(count: i32) -> Vec<Self> {
        (1..=count).map(Self::numbered).collect()
    }

    pub fn ids(records: &[Self]) -> Vec<i32> {
        records.iter().map(|record| record.id).collect()
    }
}

pub fn created_on(day: i32) -> NaiveDateTime {
    let offset = u64::try_from(day.rem_euclid(28)).unwrap_or_default();

    NaiveDate::from_ymd_opt(2016, 1, 31)
        .and_then(|date| date.checked_add_days(chrono::Days::new(offset)))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

///
/// WithoutId
///

#[derive(Clone, Debug, Default, Record)]
pub struct WithoutId {
    pub name: String,
}

///
/// StepType
///

#[derive(Clone, Copy, Debug, Default, Eq, FieldEnum, PartialEq)]
pub enum StepType {
    #[default]
    Question,
    Transition,
}

///
/// DummyClass
///
/// Sorting fixture with no `Id`.
///

#[derive(Clone, Debug, Default, Record)]
pub struct DummyClass {
    pub value: Option<i32>,
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub balance: Option<Decimal>,
    pub is_true: bool,
    pub r#type: StepType,
    pub dummy: Option<Box<DummyClass>>,
    pub values: Option<Vec<String>>,
    pub datas: Option<Vec<DummyClass>>,
}

impl DummyClass {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn names(records: &[Self]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }
}

///
/// DummyClassWithId
///

#[derive(Clone, Debug, Default, Record)]
pub struct DummyClassWithId {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub dummy_class: Option<DummyClass>,
    pub class_with_id: Option<Box<DummyClassWithId>>,
}

impl DummyClassWithId {
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            name: format!("Name{id}"),
            ..Self::default()
        }
    }

    pub fn ids(records: &[Self]) -> Vec<i32> {
        records.iter().map(|record| record.id).collect()
    }
}
