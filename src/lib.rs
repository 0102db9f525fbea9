//! # schemadoc
//!
//! Renders an object-mapping layer's schema metadata (entities, columns,
//! associations) as a Markdown data dictionary.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │            Schema source (SchemaSource trait)            │
//! │        (raw entity / field / association mappings)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [extract]
//! ┌─────────────────────────────────────────────────────────┐
//! │       Canonical model (Field / Association / ...)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [schema]
//! ┌─────────────────────────────────────────────────────────┐
//! │            SchemaSnapshot (all entities, ordered)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [render]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Markdown dictionary                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`service::EntityService`] façade ties the stages together and is
//! what the CLI and the [`tool`] adapter call through. Extraction is pure
//! and side-effect free: malformed mapping data degrades to conservative
//! defaults, unresolvable lookups degrade to absence, and no error escapes
//! the pipeline once a source is loaded.

pub mod extract;
pub mod metadata;
pub mod model;
pub mod render;
pub mod schema;
pub mod service;
pub mod tool;

pub use metadata::{EntityMetadata, JsonSchemaSource, NamingStrategy, SchemaSource, SourceError};
pub use model::{EntitySchema, SchemaSnapshot};
pub use schema::SchemaBuilder;
pub use service::EntityService;
