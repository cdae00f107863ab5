use crate::util::{reject_generics, variant_name};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident};

// derive_field_enum
pub fn derive_field_enum(input: TokenStream) -> TokenStream {
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
    reject_generics(&input.generics, "FieldEnum")?;

    let ident = &input.ident;
    let enum_name = ident.to_string();
    let variants = unit_variants(input)?;

    let variant_count = variants.len();
    let variant_models = variants.iter().map(|variant| {
        let name = variant_name(variant);

        quote! {
            ::pathsift::model::EnumVariantModel::new(#name, #ident::#variant as i64)
        }
    });

    let to_value_arms = variants.iter().map(|variant| {
        let name = variant_name(variant);

        quote! {
            Self::#variant => ::pathsift::value::EnumValue::new(Self::#variant as i64, #name),
        }
    });

    Ok(quote! {
        impl ::pathsift::traits::EnumSchema for #ident {
            fn model() -> &'static ::pathsift::model::EnumModel {
                static VARIANTS: [::pathsift::model::EnumVariantModel; #variant_count] = [
                    #(#variant_models),*
                ];
                static MODEL: ::pathsift::model::EnumModel =
                    ::pathsift::model::EnumModel::new(#enum_name, &VARIANTS);

                &MODEL
            }
        }

        impl ::pathsift::traits::FieldValue for #ident {
            const KIND: ::pathsift::model::FieldKind = ::pathsift::model::FieldKind::Enum(
                <Self as ::pathsift::traits::EnumSchema>::model,
            );

            fn to_field(&self) -> ::pathsift::traits::FieldRef<'_> {
                let value = match self {
                    #(#to_value_arms)*
                };

                ::pathsift::traits::FieldRef::Value(::pathsift::value::Value::Enum(value))
            }
        }
    })
}

fn unit_variants(input: &DeriveInput) -> Result<Vec<&Ident>, Error> {
    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "FieldEnum can only be derived for enums",
        ));
    };

    if data.variants.is_empty() {
        return Err(Error::new_spanned(
            &input.ident,
            "FieldEnum requires at least one variant",
        ));
    }

    data.variants
        .iter()
        .map(|variant| match variant.fields {
            Fields::Unit => Ok(&variant.ident),
            _ => Err(Error::new_spanned(
                variant,
                "FieldEnum variants cannot carry fields",
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_model_entry_per_variant() {
        let output = derive_field_enum(quote! {
            enum DummyType { None, All, Partial = 5 }
        })
        .to_string();

        for name in ["\"None\"", "\"All\"", "\"Partial\"", "\"DummyType\""] {
            assert!(output.contains(name), "missing {name} in {output}");
        }
    }

    #[test]
    fn rejects_data_carrying_variants() {
        let output = derive_field_enum(quote! {
            enum Shape { Point, Circle(f64) }
        })
        .to_string();

        assert!(output.contains("cannot carry fields"));
    }

    #[test]
    fn rejects_structs() {
        let output = derive_field_enum(quote! { struct NotAnEnum; }).to_string();

        assert!(output.contains("can only be derived for enums"));
    }
}
