use crate::model::field::FieldModel;

///
/// RecordModel
/// Minimal, macro-generated runtime model for one record type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Rust type name (diagnostics only).
    pub name: &'static str,
    /// Ordered field list, keyed by the normalized (Pascal-cased) field name.
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldModel]) -> Self {
        Self { name, fields }
    }

    /// Look up one field by its exact normalized name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }
}
