//! Schema inspection over derived record models.
//!
//! Paths passed here are already normalized. A collection field describes
//! its element type, so walking through a list needs no special casing.


use crate::{
    ID_FIELD, PATH_SEPARATOR,
    model::{FieldModel, RecordModel},
};

/// Walk a dotted path and return every field along it, leaf last.
///
/// Every segment but the last must be record-kinded.
#[must_use]
pub fn field_chain(model: &'static RecordModel, path: &str) -> Option<Vec<&'static FieldModel>> {
    let mut chain = Vec::new();
    let mut current = Some(model);

    for segment in path.split(PATH_SEPARATOR) {
        let field = current?.field(segment)?;
        current = field.kind.record_model();
        chain.push(field);
    }

    Some(chain)
}

#[must_use]
pub fn has_field(model: &'static RecordModel, path: &str) -> bool {
    field_chain(model, path).is_some()
}

/// True if any field along the path holds a collection.
#[must_use]
pub fn is_collection_field(model: &'static RecordModel, path: &str) -> bool {
    field_chain(model, path).is_some_and(|chain| chain.iter().any(|field| field.collection))
}

/// True if the terminal field (or its element) is a user record type.
#[must_use]
pub fn is_custom_object_field(model: &'static RecordModel, path: &str) -> bool {
    field_chain(model, path)
        .and_then(|chain| chain.last().copied())
        .is_some_and(|field| field.kind.is_record())
}

#[must_use]
pub fn has_id_subfield(model: &'static RecordModel, path: &str) -> bool {
    has_field(model, &format!("{path}{PATH_SEPARATOR}{ID_FIELD}"))
}
