//! Association extraction - one entity's relationship mappings to canonical
//! records.

use serde_json::Value;
use tracing::debug;

use crate::metadata::{raw_get, raw_str, scalar_display, EntityMetadata, SchemaSource};
use crate::model::{Association, AssociationShape, JoinColumn, JoinTable, RelationKind};

/// Walks an entity's relationship mappings and produces canonical
/// [`Association`] records, resolving each target entity through the
/// schema source.
pub struct AssociationExtractor<'a> {
    source: &'a dyn SchemaSource,
}

impl<'a> AssociationExtractor<'a> {
    /// Create an extractor over the given schema source.
    pub fn new(source: &'a dyn SchemaSource) -> Self {
        Self { source }
    }

    /// Extract the entity's associations in declaration order.
    ///
    /// A mapping that is not an object, names no target entity, or whose
    /// target cannot be resolved is dropped entirely; the rest of the
    /// entity still extracts.
    pub fn extract(&self, entity: &EntityMetadata) -> Vec<Association> {
        let mut associations = Vec::with_capacity(entity.associations.len());

        for entry in &entity.associations {
            match self.build_association(&entry.field, &entry.mapping) {
                Some(association) => associations.push(association),
                None => debug!(
                    entity = %entity.name,
                    field = %entry.field,
                    "dropping association with unresolvable target"
                ),
            }
        }

        associations
    }

    fn build_association(&self, field_name: &str, mapping: &Value) -> Option<Association> {
        if !mapping.is_object() {
            return None;
        }

        let target_entity = raw_str(mapping, "targetEntity").filter(|name| !name.is_empty())?;
        // Target table names come from the target's own metadata; a target
        // the source cannot resolve drops the whole association.
        let target_metadata = self.source.entity(&target_entity).ok()?;

        let kind = raw_get(mapping, "type")
            .and_then(Value::as_i64)
            .map_or(RelationKind::Unknown, RelationKind::from_code);

        Some(Association {
            field_name: field_name.to_string(),
            kind,
            target_entity,
            target_table: target_metadata.table_name,
            shape: extract_shape(mapping),
        })
    }
}

/// Determine the association's foreign-key shape.
///
/// Directly-owned join columns win over a join table when a mapping
/// declares both.
fn extract_shape(mapping: &Value) -> AssociationShape {
    if let Some(columns) = raw_get(mapping, "joinColumns").and_then(Value::as_array) {
        if !columns.is_empty() {
            return AssociationShape::JoinColumns(
                columns.iter().map(normalize_join_column).collect(),
            );
        }
    }

    if let Some(join_table) = raw_get(mapping, "joinTable") {
        if join_table.is_object() && raw_get(join_table, "name").is_some() {
            return AssociationShape::JoinTable(normalize_join_table(join_table));
        }
    }

    AssociationShape::None
}

fn normalize_join_table(join_table: &Value) -> JoinTable {
    let name = raw_get(join_table, "name")
        .and_then(scalar_display)
        .unwrap_or_default();

    JoinTable {
        name,
        join_columns: normalize_join_columns(raw_get(join_table, "joinColumns")),
        inverse_join_columns: normalize_join_columns(raw_get(join_table, "inverseJoinColumns")),
    }
}

fn normalize_join_columns(columns: Option<&Value>) -> Vec<JoinColumn> {
    columns
        .and_then(Value::as_array)
        .map(|columns| columns.iter().map(normalize_join_column).collect())
        .unwrap_or_default()
}

/// Normalize one join-column entry; anything malformed becomes the
/// all-default record rather than failing the pass.
fn normalize_join_column(column: &Value) -> JoinColumn {
    if !column.is_object() {
        return JoinColumn::default();
    }

    JoinColumn {
        name: raw_str(column, "name").unwrap_or_default(),
        referenced_column_name: raw_str(column, "referencedColumnName").unwrap_or_default(),
        on_delete: raw_str(column, "onDelete"),
        on_update: raw_str(column, "onUpdate"),
    }
}
