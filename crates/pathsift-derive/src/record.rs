use crate::util::{field_name, reject_generics};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{Data, DeriveInput, Error, Field, Fields, punctuated::Punctuated, token::Comma};

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    reject_generics(&input.generics, "Record")?;

    let ident = &input.ident;
    let record_name = ident.to_string();
    let fields = named_fields(input)?;
    let entries = field_entries(fields)?;

    let field_count = entries.len();
    let model_fields = entries.iter().map(|(name, field)| {
        let ty = &field.ty;

        quote! {
            ::pathsift::model::FieldModel::new::<#ty>(#name)
        }
    });

    let by_name_match_arms = entries.iter().map(|(name, field)| {
        let field_ident = &field.ident;

        quote! {
            #name => ::core::option::Option::Some(
                ::pathsift::traits::FieldValue::to_field(&self.#field_ident)
            ),
        }
    });

    Ok(quote! {
        impl ::pathsift::traits::Record for #ident {
            fn get_field(
                &self,
                field: &str,
            ) -> ::core::option::Option<::pathsift::traits::FieldRef<'_>> {
                match field {
                    #(#by_name_match_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::pathsift::traits::RecordSchema for #ident {
            fn model() -> &'static ::pathsift::model::RecordModel {
                static FIELDS: [::pathsift::model::FieldModel; #field_count] = [
                    #(#model_fields),*
                ];
                static MODEL: ::pathsift::model::RecordModel =
                    ::pathsift::model::RecordModel::new(#record_name, &FIELDS);

                &MODEL
            }
        }

        impl ::pathsift::traits::FieldValue for #ident {
            const KIND: ::pathsift::model::FieldKind = ::pathsift::model::FieldKind::Record(
                <Self as ::pathsift::traits::RecordSchema>::model,
            );

            fn to_field(&self) -> ::pathsift::traits::FieldRef<'_> {
                ::pathsift::traits::FieldRef::Record(self)
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> Result<&Punctuated<Field, Comma>, Error> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs with named fields",
        ));
    };

    match &data.fields {
        Fields::Named(named) => Ok(&named.named),
        other => Err(Error::new_spanned(
            other,
            "Record can only be derived for structs with named fields",
        )),
    }
}

// Pairs each field with its path-facing name; two fields may not collide.
fn field_entries(fields: &Punctuated<Field, Comma>) -> Result<Vec<(String, &Field)>, Error> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(Error::new_spanned(field, "expected a named field"));
        };

        let name = field_name(field_ident);
        if !seen.insert(name.clone()) {
            return Err(Error::new_spanned(
                field_ident,
                format!("field name '{name}' is used by more than one field"),
            ));
        }

        entries.push((name, field));
    }

    Ok(entries)
}
