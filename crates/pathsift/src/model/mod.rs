//! Runtime schema models.
//!
//! Models are emitted as `static`s by `#[derive(Record)]` and
//! `#[derive(FieldEnum)]`, and are the only thing schema inspection and path
//! resolution look at. Nested record kinds are referenced through model
//! functions so self-referential records stay representable.

pub mod enumeration;
pub mod field;
pub mod record;

pub use enumeration::{EnumModel, EnumVariantModel};
pub use field::{FieldKind, FieldModel, ScalarKind};
pub use record::RecordModel;
