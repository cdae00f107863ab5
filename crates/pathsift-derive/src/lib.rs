use proc_macro::TokenStream;

mod field_enum;
mod record;
mod util;

/// Derive `Record`, `RecordSchema` and `FieldValue` for a struct with named fields.
///
/// Fields are addressed by their Pascal-cased name (`number_of` → `NumberOf`,
/// `r#type` → `Type`).
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}

/// Derive `EnumSchema` and `FieldValue` for a fieldless enum.
#[proc_macro_derive(FieldEnum)]
pub fn derive_field_enum(input: TokenStream) -> TokenStream {
    field_enum::derive_field_enum(input.into()).into()
}
