//! Runtime property-path filtering and sorting for derive-introspected records.
//!
//! Callers hand over a collection plus string-named property paths and string
//! literals (typically straight from a query string or a data grid). The
//! engine resolves each path against the record's derived schema, compiles a
//! typed predicate or ordering key, and returns a new collection.
//!
//! ## Crate layout
//! - `model`: static record / field / enum models emitted by the derives.
//! - `traits`: the runtime field-accessor surface (`Record`, `FieldValue`).
//! - `value`: runtime scalar values, literal parsing, and canonical ordering.
//! - `schema`: schema inspection over `RecordModel`.
//! - `path`: casing normalization and property-path resolution.
//! - `predicate` / `order`: closure compilers for filtering and sorting.
//! - `filter` / `sort`: the collection-level entry points.

extern crate self as pathsift;

pub mod descriptor;
pub mod error;
pub mod filter;
pub mod model;
pub mod order;
pub mod path;
pub mod predicate;
pub mod schema;
pub mod sort;
pub mod traits;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;
pub use pathsift_derive::{FieldEnum, Record};

///
/// CONSTANTS
///

/// Identity field substituted when a path names a whole record.
pub const ID_FIELD: &str = "Id";

/// Separator between the segments of a property path.
pub const PATH_SEPARATOR: char = '.';

/// Word separator accepted in kebab-cased path segments.
pub const WORD_SEPARATOR: char = '-';

/// Sort direction keyword (compared case-insensitively) selecting descending order.
pub const DESCENDING: &str = "desc";

///
/// Prelude
///
/// Domain vocabulary plus the collection entry points.
///

pub mod prelude {
    pub use crate::{
        FieldEnum, Record,
        descriptor::{FilterDescriptor, SortCriterion},
        error::Error,
        filter::{apply_filter, apply_filters},
        order::SortDirection,
        sort::sort,
        traits::{EnumSchema, FieldValue, Record, RecordSchema},
        value::Value,
    };
}
