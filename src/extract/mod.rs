//! Extraction of canonical schema records from raw mapping metadata.
//!
//! The extractors are the only code that reads the loosely-typed mapping
//! shapes; everything they emit is canonical [`crate::model`] data.

pub mod column_type;

mod associations;
mod fields;

pub use associations::AssociationExtractor;
pub use fields::FieldExtractor;
