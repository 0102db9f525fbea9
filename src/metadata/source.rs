//! The schema source seam - where mapping metadata comes from.
//!
//! [`SchemaSource`] abstracts over the system of record for entity mapping
//! metadata. The pipeline re-reads the source on every call and never caches
//! what it hands back. [`JsonSchemaSource`] is the file-backed
//! implementation used by the CLI; a document looks like:
//!
//! ```json
//! {
//!   "namingStrategy": "underscore",
//!   "entities": [
//!     {
//!       "name": "User",
//!       "table": "user_table",
//!       "options": {"comment": "用户表"},
//!       "identifier": ["id"],
//!       "fields": [
//!         {"field": "id", "mapping": {"type": "integer"}},
//!         {"field": "createTime", "mapping": {"type": "datetime"}}
//!       ],
//!       "associations": [
//!         {"field": "roles", "mapping": {"type": 8, "targetEntity": "Role"}}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Entities, fields and associations are arrays so that declaration order
//! survives the wire.

use std::fs;
use std::path::Path;

use inflector::Inflector as _;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::mapping::FieldMapping;

/// Errors reported by a schema source.
///
/// Lookup failures are recoverable by design; the aggregator flattens them
/// to "not found".
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to read a schema document from disk.
    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a schema document.
    #[error("failed to parse schema document: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested entity is not mapped.
    #[error("entity not found: {0}")]
    NotFound(String),
}

/// Converts a logical field name to a physical column name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStrategy {
    /// Field names pass through unchanged.
    #[default]
    Default,
    /// Field names are converted to snake_case.
    Underscore,
}

impl NamingStrategy {
    /// Derive the column name for a field.
    pub fn column_name(&self, field_name: &str) -> String {
        match self {
            NamingStrategy::Default => field_name.to_string(),
            NamingStrategy::Underscore => field_name.to_snake_case(),
        }
    }
}

/// Raw mapping metadata for one entity, as delivered by the source.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityMetadata {
    /// Entity identifier (typically the mapped type's name).
    pub name: String,
    /// Physical table name.
    #[serde(rename = "table")]
    pub table_name: String,
    /// Table-level options; `comment` is the only key the pipeline reads.
    #[serde(default)]
    pub options: Value,
    /// Identifier field names in declared order.
    #[serde(default)]
    pub identifier: Vec<String>,
    /// Field mappings in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
    /// Association mappings in declaration order.
    #[serde(default)]
    pub associations: Vec<AssociationEntry>,
}

/// One field-name/mapping pair.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldEntry {
    /// Logical field name.
    pub field: String,
    /// Mapping data.
    #[serde(default)]
    pub mapping: FieldMapping,
}

/// One relation-name/mapping pair. Association mappings stay raw JSON; the
/// extractor rejects anything that is not an object.
#[derive(Debug, Clone, Deserialize)]
pub struct AssociationEntry {
    /// Relation field name.
    pub field: String,
    /// Mapping data.
    #[serde(default)]
    pub mapping: Value,
}

impl EntityMetadata {
    /// Create metadata with the given identifier and table name.
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            options: Value::Null,
            identifier: Vec::new(),
            fields: Vec::new(),
            associations: Vec::new(),
        }
    }

    /// Set the table-level options.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    /// Set the identifier field names.
    pub fn with_identifier(mut self, identifier: Vec<impl Into<String>>) -> Self {
        self.identifier = identifier.into_iter().map(Into::into).collect();
        self
    }

    /// Append a field mapping.
    pub fn with_field(mut self, field: impl Into<String>, mapping: FieldMapping) -> Self {
        self.fields.push(FieldEntry {
            field: field.into(),
            mapping,
        });
        self
    }

    /// Append an association mapping.
    pub fn with_association(mut self, field: impl Into<String>, mapping: Value) -> Self {
        self.associations.push(AssociationEntry {
            field: field.into(),
            mapping,
        });
        self
    }

    /// Table-level comment; empty when absent or not a string.
    pub fn table_comment(&self) -> String {
        self.options
            .as_object()
            .and_then(|options| options.get("comment"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Look up a field mapping by logical field name.
    pub fn field_mapping(&self, field_name: &str) -> Option<&FieldMapping> {
        self.fields
            .iter()
            .find(|entry| entry.field == field_name)
            .map(|entry| &entry.mapping)
    }
}

/// System of record for entity mapping metadata.
pub trait SchemaSource {
    /// All mapped entities, in the source's own order.
    fn all_entities(&self) -> Vec<EntityMetadata>;

    /// Look up one entity by identifier.
    ///
    /// Absence is a recoverable condition, reported as
    /// [`SourceError::NotFound`].
    fn entity(&self, identifier: &str) -> Result<EntityMetadata, SourceError>;

    /// Derive the physical column name for a field of an entity.
    ///
    /// The default implementation passes the field name through unchanged.
    fn column_name(&self, field_name: &str, _entity_name: &str) -> String {
        field_name.to_string()
    }
}

/// Schema source backed by a JSON document.
#[derive(Debug, Clone)]
pub struct JsonSchemaSource {
    naming: NamingStrategy,
    entities: Vec<EntityMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaDocument {
    #[serde(default)]
    naming_strategy: NamingStrategy,
    #[serde(default)]
    entities: Vec<EntityMetadata>,
}

impl JsonSchemaSource {
    /// Create a source from already-parsed metadata.
    pub fn new(naming: NamingStrategy, entities: Vec<EntityMetadata>) -> Self {
        Self { naming, entities }
    }

    /// Parse a schema document.
    pub fn from_str(document: &str) -> Result<Self, SourceError> {
        let document: SchemaDocument = serde_json::from_str(document)?;
        Ok(Self::new(document.naming_strategy, document.entities))
    }

    /// Load a schema document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Self::from_str(&fs::read_to_string(path)?)
    }

    /// The configured naming strategy.
    pub fn naming_strategy(&self) -> NamingStrategy {
        self.naming
    }
}

impl SchemaSource for JsonSchemaSource {
    fn all_entities(&self) -> Vec<EntityMetadata> {
        self.entities.clone()
    }

    fn entity(&self, identifier: &str) -> Result<EntityMetadata, SourceError> {
        self.entities
            .iter()
            .find(|entity| entity.name == identifier)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(identifier.to_string()))
    }

    fn column_name(&self, field_name: &str, _entity_name: &str) -> String {
        self.naming.column_name(field_name)
    }
}
