//! Ordering-key compilation.

use crate::{
    DESCENDING,
    model::FieldModel,
    path::ResolvedPath,
    traits::{FieldRef, Record},
    value::{Value, sentinel},
};
use derive_more::Display;
use std::{cmp::Ordering, fmt, sync::Arc};
use tracing::trace;

type Reader = Box<dyn Fn(&dyn Record) -> Value + Send + Sync>;

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum SortDirection {
    #[default]
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl SortDirection {
    /// Only `"desc"` (any case) is descending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(DESCENDING) {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Orient an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

///
/// KeyExtractor
///
/// Reads the ordering key at the end of a resolved path.
///
/// An absent record part-way along the path yields the leaf kind's sentinel;
/// an absent top-level leaf yields `Value::Null`.
///

pub struct KeyExtractor {
    path: String,
    reader: Reader,
}

impl KeyExtractor {
    #[must_use]
    pub fn compile(path: &ResolvedPath) -> Self {
        let fallback = Arc::new(sentinel(path.leaf_kind()));
        trace!(%path, sentinel = %fallback, "compiled ordering key");

        Self {
            path: path.to_string(),
            reader: compile_read(path.segments(), fallback),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn extract(&self, record: &dyn Record) -> Value {
        (self.reader)(record)
    }
}

impl fmt::Debug for KeyExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyExtractor")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn compile_read(segments: &[&'static FieldModel], fallback: Arc<Value>) -> Reader {
    let Some((field, rest)) = segments.split_first() else {
        return Box::new(|_: &dyn Record| Value::Null);
    };
    let name = field.name;

    if rest.is_empty() {
        return Box::new(move |record: &dyn Record| {
            record.get_field(name).map_or(Value::Null, FieldRef::into_value)
        });
    }

    let inner = compile_read(rest, Arc::clone(&fallback));

    Box::new(move |record: &dyn Record| {
        match record.get_field(name).and_then(|field| field.as_record()) {
            Some(nested) => inner(nested),
            None => fallback.as_ref().clone(),
        }
    })
}
