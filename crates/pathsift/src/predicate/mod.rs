//! Filter predicate compilation.
//!
//! A resolved path plus a literal becomes a chain of boxed closures: one per
//! segment, each reading its field and handing the nested record to the
//! next. Collection segments fan out into an any-match.


use crate::{
    error::Error,
    model::FieldModel,
    path::ResolvedPath,
    traits::{FieldRef, Record},
    value::{Value, parse_literal},
};
use std::{fmt, sync::Arc};
use tracing::trace;

type Matcher = Box<dyn Fn(&dyn Record) -> bool + Send + Sync>;

///
/// LeafTest
///
/// Comparison applied to the value found at the end of a path.
///

#[derive(Clone, Debug, PartialEq)]
pub enum LeafTest {
    /// Plain equality; `Value::Null` on both sides counts as equal.
    Equals(Value),
    /// The leaf must be present and equal.
    HasValueEquals(Value),
}

impl LeafTest {
    /// Pick the comparison for a leaf shape and an optional literal.
    ///
    /// A null literal skips the presence check. Nullable and text leaves get
    /// `Equals(Null)`, which matches absent leaves and never a present
    /// string. Other kinds cannot hold null and are rejected.
    pub fn build(path: &ResolvedPath, literal: Option<&str>) -> Result<Self, Error> {
        match literal {
            Some(literal) => {
                let value = parse_literal(path.leaf_kind(), literal).map_err(|source| {
                    Error::InvalidLiteral {
                        path: path.to_string(),
                        source,
                    }
                })?;

                if path.is_nullable() {
                    Ok(Self::HasValueEquals(value))
                } else {
                    Ok(Self::Equals(value))
                }
            }
            None if path.is_nullable() || path.leaf_kind().is_text() => {
                Ok(Self::Equals(Value::Null))
            }
            None => Err(Error::NullLiteral {
                path: path.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        match self {
            Self::Equals(expected) => value == expected,
            Self::HasValueEquals(expected) => !value.is_null() && value == expected,
        }
    }
}

///
/// Predicate
///
/// Compiled equality filter over records of one type.
///

pub struct Predicate {
    path: String,
    matcher: Matcher,
}

impl Predicate {
    pub fn compile(path: &ResolvedPath, literal: Option<&str>) -> Result<Self, Error> {
        let test = Arc::new(LeafTest::build(path, literal)?);
        trace!(%path, ?test, "compiled filter predicate");

        Ok(Self {
            path: path.to_string(),
            matcher: compile_walk(path.segments(), test),
        })
    }

    /// Canonical path the predicate reads.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Evaluate against one record. Never panics; an absent record anywhere
    /// along the path is a non-match.
    #[must_use]
    pub fn matches(&self, record: &dyn Record) -> bool {
        (self.matcher)(record)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn compile_walk(segments: &[&'static FieldModel], test: Arc<LeafTest>) -> Matcher {
    let Some((field, rest)) = segments.split_first() else {
        return Box::new(|_: &dyn Record| false);
    };
    let name = field.name;

    if rest.is_empty() {
        return if field.collection {
            // list of scalars: any element equal
            Box::new(move |record: &dyn Record| match record.get_field(name) {
                Some(FieldRef::List(items)) => items
                    .into_iter()
                    .any(|item| test.test(&item.into_value())),
                _ => false,
            })
        } else {
            Box::new(move |record: &dyn Record| {
                let value = record.get_field(name).map_or(Value::Null, FieldRef::into_value);
                test.test(&value)
            })
        };
    }

    let inner = compile_walk(rest, test);

    if field.collection {
        Box::new(move |record: &dyn Record| match record.get_field(name) {
            Some(FieldRef::List(items)) => items
                .iter()
                .filter_map(FieldRef::as_record)
                .any(|element| inner(element)),
            _ => false,
        })
    } else {
        // null guard
        Box::new(move |record: &dyn Record| {
            record
                .get_field(name)
                .and_then(|field| field.as_record())
                .is_some_and(|nested| inner(nested))
        })
    }
}
