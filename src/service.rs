//! Query façade over the extraction pipeline.
//!
//! [`EntityService`] is the seam external callers (the CLI, the tool
//! adapter) go through. It is pure delegation: every call re-reads the
//! schema source and recomputes its answer, so repeated calls against an
//! unchanged source are byte-identical.

use crate::metadata::SchemaSource;
use crate::model::{EntitySchema, SchemaSnapshot};
use crate::render;
use crate::schema::SchemaBuilder;

/// Read API over a schema source.
pub struct EntityService<S: SchemaSource> {
    source: S,
}

impl<S: SchemaSource> EntityService<S> {
    /// Create a service over the given schema source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying schema source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Extract every entity's schema.
    pub fn all_entities_metadata(&self) -> SchemaSnapshot {
        SchemaBuilder::new(&self.source).build_all()
    }

    /// Extract one entity's schema; `None` when the identifier is not a
    /// mapped entity or resolution fails for any reason.
    pub fn entity_metadata(&self, identifier: &str) -> Option<EntitySchema> {
        SchemaBuilder::new(&self.source).entity_schema(identifier)
    }

    /// All table names and comments as a Markdown index.
    pub fn all_table_names(&self) -> String {
        render::render_table_index(&self.all_entities_metadata())
    }

    /// One table's fields as a Markdown table; a "not found" placeholder
    /// when the table is unknown.
    pub fn table_fields(&self, table_name: &str) -> String {
        render::render_table_fields(&self.all_entities_metadata(), table_name)
    }

    /// The full database dictionary as Markdown.
    pub fn generate_database_markdown(&self) -> String {
        render::render_dictionary(&self.all_entities_metadata())
    }
}
