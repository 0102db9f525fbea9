//! Canonical schema model - the normalized output of the extractors.
//!
//! Raw mapping records (see [`crate::metadata`]) are loosely typed; everything
//! downstream of the extractors operates only on the types in this module.

use serde::{Deserialize, Serialize};

/// A single column of an entity's table.
///
/// Constructed once per extraction pass and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Physical column name, derived via the source's naming strategy.
    pub column_name: String,
    /// Normalized column type (see [`crate::extract::column_type`]).
    pub type_name: String,
    /// Column length, falling back to numeric precision when absent.
    pub length: Option<i64>,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Default value, resolved to a display-safe variant.
    pub default: DefaultValue,
    /// Raw free-text comment from the mapping options.
    pub comment: String,
    /// Comment enriched for display: `-` placeholder, primary-key marker,
    /// enum value listing.
    pub display_comment: String,
    /// Whether this column is part of the entity identifier.
    pub is_primary_key: bool,
    /// Enum descriptor when the mapping declares an enum type.
    pub enum_info: Option<EnumInfo>,
}

/// Enum type attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumInfo {
    /// Name of the enum type.
    pub type_name: String,
    /// Case values in declaration order (case name for valueless enums).
    pub values: Vec<String>,
}

/// A column default, resolved once during field extraction.
///
/// The variants record where the display form came from: a plain scalar, an
/// enum case, or an arbitrary object coerced to its string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// No default declared.
    None,
    /// Scalar default (string, number, boolean).
    Scalar(String),
    /// Enum case default - the case's backing value, or its name.
    EnumValue(String),
    /// Non-scalar default coerced to a best-effort string form.
    ObjectDisplay(String),
}

impl DefaultValue {
    /// The render-ready form; `None` when no default is declared.
    pub fn display(&self) -> Option<&str> {
        match self {
            DefaultValue::None => None,
            DefaultValue::Scalar(s)
            | DefaultValue::EnumValue(s)
            | DefaultValue::ObjectDisplay(s) => Some(s),
        }
    }
}

impl Default for DefaultValue {
    fn default() -> Self {
        DefaultValue::None
    }
}

/// Semantic kind of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
    Unknown,
}

impl RelationKind {
    /// Map the source's integer kind code to a semantic kind.
    ///
    /// Unrecognized codes map to [`RelationKind::Unknown`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => RelationKind::OneToOne,
            2 => RelationKind::ManyToOne,
            4 => RelationKind::OneToMany,
            8 => RelationKind::ManyToMany,
            _ => RelationKind::Unknown,
        }
    }

    /// Display label used in rendered documentation.
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::OneToOne => "一对一",
            RelationKind::ManyToOne => "多对一",
            RelationKind::OneToMany => "一对多",
            RelationKind::ManyToMany => "多对多",
            RelationKind::Unknown => "未知",
        }
    }
}

/// One foreign-key column of an association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinColumn {
    /// Local column name.
    pub name: String,
    /// Referenced column in the target table.
    pub referenced_column_name: String,
    /// ON DELETE action.
    pub on_delete: Option<String>,
    /// ON UPDATE action.
    pub on_update: Option<String>,
}

impl Default for JoinColumn {
    fn default() -> Self {
        Self {
            name: String::new(),
            referenced_column_name: String::new(),
            on_delete: None,
            on_update: None,
        }
    }
}

/// Junction table mediating a many-to-many association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinTable {
    /// Junction table name.
    pub name: String,
    /// Join columns pointing at the owning side.
    pub join_columns: Vec<JoinColumn>,
    /// Join columns pointing at the target side.
    pub inverse_join_columns: Vec<JoinColumn>,
}

/// How an association is realized in the database.
///
/// At most one shape applies; an association may legitimately have neither
/// (e.g. the inverse side of a one-to-many).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssociationShape {
    /// No foreign-key columns on this side.
    None,
    /// The association owns foreign-key columns directly.
    JoinColumns(Vec<JoinColumn>),
    /// The association is mediated by a junction table.
    JoinTable(JoinTable),
}

/// A declared relationship from one entity to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    /// Relation field name on the owning entity.
    pub field_name: String,
    /// Semantic kind of the relationship.
    pub kind: RelationKind,
    /// Identifier of the target entity.
    pub target_entity: String,
    /// Table name of the target entity.
    pub target_table: String,
    /// Foreign-key shape, when applicable.
    pub shape: AssociationShape,
}

impl Association {
    /// Whether the association owns foreign-key columns directly.
    pub fn has_join_columns(&self) -> bool {
        matches!(self.shape, AssociationShape::JoinColumns(_))
    }

    /// Whether the association is mediated by a junction table.
    pub fn has_join_table(&self) -> bool {
        matches!(self.shape, AssociationShape::JoinTable(_))
    }
}

/// Extracted metadata for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Physical table name.
    pub table_name: String,
    /// Table-level comment, empty when not declared.
    pub comment: String,
    /// Fields, primary keys first, then declaration order.
    pub fields: Vec<Field>,
    /// Associations in declaration order, keyed by relation field name.
    pub associations: Vec<Association>,
}

impl EntitySchema {
    /// Look up an association by its relation field name.
    pub fn association(&self, field_name: &str) -> Option<&Association> {
        self.associations.iter().find(|a| a.field_name == field_name)
    }
}

/// One entry of a [`SchemaSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Entity identifier the schema was extracted from.
    pub entity: String,
    /// The extracted schema.
    pub schema: EntitySchema,
}

/// Point-in-time extraction of every entity known to the schema source.
///
/// Entries keep the source's iteration order so rendering is deterministic;
/// lookups are linear, the way column lists are kept ordered with name
/// accessors elsewhere in the crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    entries: Vec<SnapshotEntry>,
}

impl SchemaSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity's schema, preserving insertion order.
    pub fn insert(&mut self, entity: impl Into<String>, schema: EntitySchema) {
        self.entries.push(SnapshotEntry {
            entity: entity.into(),
            schema,
        });
    }

    /// Look up a schema by entity identifier.
    pub fn get(&self, entity: &str) -> Option<&EntitySchema> {
        self.entries
            .iter()
            .find(|e| e.entity == entity)
            .map(|e| &e.schema)
    }

    /// Look up a schema by physical table name.
    pub fn find_by_table(&self, table_name: &str) -> Option<&EntitySchema> {
        self.entries
            .iter()
            .find(|e| e.schema.table_name == table_name)
            .map(|e| &e.schema)
    }

    /// Iterate entries in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries.iter()
    }

    /// Number of entities in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot contains no entities.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
