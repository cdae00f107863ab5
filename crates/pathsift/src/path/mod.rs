//! Property-path resolution.
//!
//! A raw caller path is normalized, confirmed against the record model, and
//! redirected to `.Id` when it names a whole record. Only paths that survive
//! this step ever reach the predicate or ordering compilers.

pub mod casing;


use crate::{
    ID_FIELD, PATH_SEPARATOR,
    model::{FieldKind, FieldModel, RecordModel},
    schema,
};
use std::fmt;

// re-exports
pub use casing::{normalize_path, normalize_segment};

///
/// ResolvedPath
///
/// A confirmed chain of fields, leaf last.
///

#[derive(Clone, Debug)]
pub struct ResolvedPath {
    segments: Vec<&'static FieldModel>,
    leaf: &'static FieldModel,
}

impl ResolvedPath {
    #[must_use]
    pub fn segments(&self) -> &[&'static FieldModel] {
        &self.segments
    }

    #[must_use]
    pub const fn leaf(&self) -> &'static FieldModel {
        self.leaf
    }

    #[must_use]
    pub const fn leaf_kind(&self) -> FieldKind {
        self.leaf().kind
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.leaf().nullable
    }

    /// Whether any segment holds a collection.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.segments.iter().any(|field| field.collection)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            f.write_str(field.name)?;
        }

        Ok(())
    }
}

/// Resolve a raw property path against a record model.
///
/// Returns `None` when the path does not exist, or names a record (or a
/// collection of records) that has no `Id` to stand in for it.
#[must_use]
pub fn resolve(model: &'static RecordModel, raw: &str) -> Option<ResolvedPath> {
    let normalized = if raw.is_empty() {
        ID_FIELD.to_string()
    } else {
        normalize_path(raw)
    };

    if !schema::has_field(model, &normalized) {
        return None;
    }

    let canonical = if schema::is_custom_object_field(model, &normalized) {
        if !schema::has_id_subfield(model, &normalized) {
            return None;
        }
        format!("{normalized}{PATH_SEPARATOR}{ID_FIELD}")
    } else {
        normalized
    };

    let segments = schema::field_chain(model, &canonical)?;
    let leaf = *segments.last()?;

    Some(ResolvedPath { segments, leaf })
}
