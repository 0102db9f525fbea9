//! Schema-source seam and raw mapping model.
//!
//! This module owns the boundary between the pipeline and whatever system
//! of record supplies mapping metadata: the [`SchemaSource`] trait, the raw
//! per-entity record ([`EntityMetadata`]), and the loosely-typed mapping
//! shapes ([`FieldMapping`]) that the extractors normalize away.

mod mapping;
mod source;

pub use mapping::{DefaultSpec, EnumCase, EnumSpec, FieldMapping, TypedFieldMapping};
pub use source::{
    AssociationEntry, EntityMetadata, FieldEntry, JsonSchemaSource, NamingStrategy, SchemaSource,
    SourceError,
};

pub(crate) use mapping::{raw_get, raw_str, scalar_display};
