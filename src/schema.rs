//! Schema aggregation - per-entity extraction composed over a whole source.

use tracing::debug;

use crate::extract::{AssociationExtractor, FieldExtractor};
use crate::metadata::{EntityMetadata, SchemaSource};
use crate::model::{EntitySchema, SchemaSnapshot};

/// Composes the field and association extractors into whole-entity and
/// whole-schema snapshots.
///
/// Every call re-reads the schema source; nothing is cached between calls.
pub struct SchemaBuilder<'a> {
    source: &'a dyn SchemaSource,
    fields: FieldExtractor<'a>,
    associations: AssociationExtractor<'a>,
}

impl<'a> SchemaBuilder<'a> {
    /// Create a builder over the given schema source.
    pub fn new(source: &'a dyn SchemaSource) -> Self {
        Self {
            source,
            fields: FieldExtractor::new(source),
            associations: AssociationExtractor::new(source),
        }
    }

    /// Extract one entity's schema.
    pub fn build_schema(&self, entity: &EntityMetadata) -> EntitySchema {
        EntitySchema {
            table_name: entity.table_name.clone(),
            comment: entity.table_comment(),
            fields: self.fields.extract(entity),
            associations: self.associations.extract(entity),
        }
    }

    /// Extract every entity known to the source, in source order.
    pub fn build_all(&self) -> SchemaSnapshot {
        let mut snapshot = SchemaSnapshot::new();
        for entity in self.source.all_entities() {
            let schema = self.build_schema(&entity);
            snapshot.insert(entity.name, schema);
        }
        snapshot
    }

    /// Extract one entity by identifier.
    ///
    /// Any lookup failure degrades to `None`; a bad identifier never fails
    /// the caller.
    pub fn entity_schema(&self, identifier: &str) -> Option<EntitySchema> {
        match self.source.entity(identifier) {
            Ok(entity) => Some(self.build_schema(&entity)),
            Err(error) => {
                debug!(%identifier, %error, "entity lookup failed");
                None
            }
        }
    }
}
