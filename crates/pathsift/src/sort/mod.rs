//! Collection-level ordering by one property path.


use crate::{
    descriptor::SortCriterion, order::KeyExtractor, path::resolve, traits::RecordSchema,
    value::canonical_cmp,
};
use tracing::debug;

/// Stable sort by the criterion's column.
///
/// Columns that do not resolve, or that pass through a collection, leave the
/// collection in its input order.
#[must_use]
pub fn sort<T: RecordSchema>(collection: Vec<T>, criterion: &SortCriterion) -> Vec<T> {
    let model = T::model();
    let Some(path) = resolve(model, &criterion.sort_column) else {
        debug!(
            record = model.name,
            sort_column = %criterion.sort_column,
            "sort column does not resolve; skipping"
        );
        return collection;
    };

    if path.is_collection() {
        debug!(
            record = model.name,
            %path,
            "sort column passes through a collection; skipping"
        );
        return collection;
    }

    let direction = criterion.direction();
    let key = KeyExtractor::compile(&path);

    let mut keyed: Vec<_> = collection
        .into_iter()
        .map(|record| (key.extract(&record), record))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| direction.apply(canonical_cmp(left, right)));

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// `sort` over optional inputs; an absent criterion sorts by `Id` ascending.
#[must_use]
pub fn sort_opt<T: RecordSchema>(
    collection: Option<Vec<T>>,
    criterion: Option<&SortCriterion>,
) -> Option<Vec<T>> {
    let collection = collection?;

    Some(match criterion {
        Some(criterion) => sort(collection, criterion),
        None => sort(collection, &SortCriterion::default()),
    })
}
