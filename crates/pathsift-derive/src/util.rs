use convert_case::{Case, Casing};
use syn::{Generics, Ident, ext::IdentExt};

/// Path-facing name of a struct field.
pub fn field_name(ident: &Ident) -> String {
    ident.unraw().to_string().to_case(Case::Pascal)
}

/// Path-facing name of an enum variant; variants are already Pascal-cased.
pub fn variant_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

pub fn reject_generics(generics: &Generics, derive: &str) -> Result<(), syn::Error> {
    if generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &generics.params,
            format!("{derive} cannot be derived for generic types"),
        ))
    }
}
