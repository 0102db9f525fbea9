//! Field extraction - one entity's column mappings to canonical records.

use crate::metadata::{EntityMetadata, FieldMapping, SchemaSource};
use crate::model::{EnumInfo, Field};

use super::column_type;

/// Walks an entity's column mappings and produces canonical [`Field`]
/// records: identifier columns first, then the rest in declaration order.
pub struct FieldExtractor<'a> {
    source: &'a dyn SchemaSource,
}

impl<'a> FieldExtractor<'a> {
    /// Create an extractor over the given schema source.
    pub fn new(source: &'a dyn SchemaSource) -> Self {
        Self { source }
    }

    /// Extract the entity's fields.
    ///
    /// Identifier fields are emitted first (in declared identifier order),
    /// each flagged as a primary key; remaining mapped fields follow in
    /// declaration order. An identifier without a column mapping is skipped
    /// entirely - identifiers mapped solely through an association do not
    /// appear in the field list.
    pub fn extract(&self, entity: &EntityMetadata) -> Vec<Field> {
        let mut fields = Vec::with_capacity(entity.fields.len());

        for id_field in &entity.identifier {
            if let Some(mapping) = entity.field_mapping(id_field) {
                fields.push(self.build_field(entity, id_field, mapping, true));
            }
        }

        for entry in &entity.fields {
            if !entity.identifier.contains(&entry.field) {
                fields.push(self.build_field(entity, &entry.field, &entry.mapping, false));
            }
        }

        fields
    }

    fn build_field(
        &self,
        entity: &EntityMetadata,
        field_name: &str,
        mapping: &FieldMapping,
        is_primary_key: bool,
    ) -> Field {
        let comment = mapping.comment();
        let enum_info = mapping.enum_info();
        let display_comment = display_comment(&comment, is_primary_key, enum_info.as_ref());

        Field {
            column_name: self.source.column_name(field_name, &entity.name),
            type_name: column_type::normalize(&mapping.type_name()),
            length: mapping.length().or_else(|| mapping.precision()),
            nullable: mapping.nullable(),
            default: mapping.default_value(),
            comment,
            display_comment,
            is_primary_key,
            enum_info,
        }
    }
}

/// Derive the display comment: the raw comment or a `-` placeholder, a
/// primary-key marker, and the enum value listing.
fn display_comment(comment: &str, is_primary_key: bool, enum_info: Option<&EnumInfo>) -> String {
    let mut display = if comment.is_empty() {
        "-".to_string()
    } else {
        comment.to_string()
    };

    if is_primary_key {
        display.push_str(" (主键)");
    }

    if let Some(info) = enum_info {
        display.push_str(&format!(" (可选值: {})", info.values.join(", ")));
    }

    display
}
