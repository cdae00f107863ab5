use crate::value::EnumValue;

///
/// EnumModel
/// Runtime model for a fieldless enum, emitted by `#[derive(FieldEnum)]`.
///

#[derive(Debug)]
pub struct EnumModel {
    pub name: &'static str,
    /// Variants in declaration order.
    pub variants: &'static [EnumVariantModel],
}

impl EnumModel {
    #[must_use]
    pub const fn new(name: &'static str, variants: &'static [EnumVariantModel]) -> Self {
        Self { name, variants }
    }

    /// Find a variant by its exact (case-sensitive) name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<EnumValue> {
        self.variants
            .iter()
            .find(|variant| variant.name == name)
            .map(EnumVariantModel::value)
    }

    /// Find a declared variant by discriminant.
    #[must_use]
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<EnumValue> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
            .map(EnumVariantModel::value)
    }

    /// The zero value of the enum: discriminant `0`, named when declared.
    #[must_use]
    pub fn zero(&self) -> EnumValue {
        self.variant_by_discriminant(0)
            .unwrap_or(EnumValue::new(0, ""))
    }
}

///
/// EnumVariantModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnumVariantModel {
    pub name: &'static str,
    pub discriminant: i64,
}

impl EnumVariantModel {
    #[must_use]
    pub const fn new(name: &'static str, discriminant: i64) -> Self {
        Self { name, discriminant }
    }

    #[must_use]
    pub const fn value(&self) -> EnumValue {
        EnumValue::new(self.discriminant, self.name)
    }
}
