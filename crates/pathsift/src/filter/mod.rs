//! Collection-level equality filtering.
//!
//! Every descriptor narrows the previous result. Descriptors whose path does
//! not resolve are skipped; descriptors whose literal does not convert fail
//! the whole call.

#[cfg(test)]
mod tests;

use crate::{
    descriptor::FilterDescriptor, error::Error, path::resolve, predicate::Predicate,
    traits::RecordSchema,
};
use tracing::debug;

/// Apply every descriptor in order (logical AND).
pub fn apply_filters<T: RecordSchema>(
    collection: Vec<T>,
    filters: &[FilterDescriptor],
) -> Result<Vec<T>, Error> {
    if collection.is_empty() || filters.is_empty() {
        return Ok(collection);
    }

    filters.iter().try_fold(collection, apply_filter)
}

/// Keep the records whose `property_path` equals `value`.
pub fn apply_filter<T: RecordSchema>(
    collection: Vec<T>,
    filter: &FilterDescriptor,
) -> Result<Vec<T>, Error> {
    if collection.is_empty() {
        return Ok(collection);
    }

    let model = T::model();
    let Some(path) = resolve(model, &filter.property_path) else {
        debug!(
            record = model.name,
            property_path = %filter.property_path,
            "filter path does not resolve; skipping"
        );
        return Ok(collection);
    };

    let predicate = Predicate::compile(&path, filter.value.as_deref())?;

    Ok(collection
        .into_iter()
        .filter(|record| predicate.matches(record))
        .collect())
}

/// `apply_filters` over optional inputs; an absent collection stays absent.
pub fn apply_filters_opt<T: RecordSchema>(
    collection: Option<Vec<T>>,
    filters: Option<&[FilterDescriptor]>,
) -> Result<Option<Vec<T>>, Error> {
    match (collection, filters) {
        (Some(collection), Some(filters)) => apply_filters(collection, filters).map(Some),
        (collection, _) => Ok(collection),
    }
}

/// `apply_filter` over optional inputs; an absent descriptor is a no-op.
pub fn apply_filter_opt<T: RecordSchema>(
    collection: Option<Vec<T>>,
    filter: Option<&FilterDescriptor>,
) -> Result<Option<Vec<T>>, Error> {
    match (collection, filter) {
        (Some(collection), Some(filter)) => apply_filter(collection, filter).map(Some),
        (collection, _) => Ok(collection),
    }
}
