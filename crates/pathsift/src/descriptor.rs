use crate::order::SortDirection;
use serde::{Deserialize, Serialize};

///
/// FilterDescriptor
///
/// "The field at `property_path` must equal `value`."
///
/// An empty path addresses the record's `Id`. A `None` value is a valid
/// descriptor; see `Predicate::compile` for how it is interpreted.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterDescriptor {
    #[serde(alias = "propertyName")]
    pub property_path: String,
    pub value: Option<String>,
}

impl FilterDescriptor {
    #[must_use]
    pub fn new(property_path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            value: Some(value.into()),
        }
    }

    /// A descriptor carrying a null literal.
    #[must_use]
    pub fn null(property_path: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            value: None,
        }
    }
}

///
/// SortCriterion
///
/// Column plus free-form direction. The direction is only ever compared
/// against `"desc"`; anything else sorts ascending.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortCriterion {
    pub sort_column: String,
    pub sort_direction: String,
}

impl SortCriterion {
    #[must_use]
    pub fn new(sort_column: impl Into<String>, sort_direction: impl Into<String>) -> Self {
        Self {
            sort_column: sort_column.into(),
            sort_direction: sort_direction.into(),
        }
    }

    #[must_use]
    pub fn asc(sort_column: impl Into<String>) -> Self {
        Self::new(sort_column, SortDirection::Asc.to_string())
    }

    #[must_use]
    pub fn desc(sort_column: impl Into<String>) -> Self {
        Self::new(sort_column, SortDirection::Desc.to_string())
    }

    #[must_use]
    pub fn direction(&self) -> SortDirection {
        SortDirection::parse(&self.sort_direction)
    }
}
