//! Loosely-typed mapping records as delivered by the schema source.
//!
//! A field mapping arrives either as an arbitrary JSON value (`Raw`) or as a
//! strongly-typed record built by Rust callers (`Typed`). Both normalize to
//! the same canonical [`Field`](crate::model::Field) data through the
//! accessors here; nothing downstream touches the raw shapes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::{DefaultValue, EnumInfo};

/// A single field's mapping data.
#[derive(Debug, Clone)]
pub enum FieldMapping {
    /// Untyped mapping data, an object is expected. Anything else degrades
    /// to conservative defaults during extraction.
    Raw(Value),
    /// Strongly-typed mapping record for programmatic construction.
    Typed(TypedFieldMapping),
}

impl Default for FieldMapping {
    fn default() -> Self {
        FieldMapping::Raw(Value::Null)
    }
}

// Wire data is always the raw shape; `Typed` only exists in-process.
impl<'de> Deserialize<'de> for FieldMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(FieldMapping::Raw(Value::deserialize(deserializer)?))
    }
}

impl FieldMapping {
    /// Raw column type name; empty when absent or malformed.
    pub fn type_name(&self) -> String {
        match self {
            FieldMapping::Raw(value) => raw_str(value, "type").unwrap_or_default(),
            FieldMapping::Typed(typed) => typed.type_name.clone().unwrap_or_default(),
        }
    }

    /// Declared column length, integers only.
    pub fn length(&self) -> Option<i64> {
        match self {
            FieldMapping::Raw(value) => raw_get(value, "length").and_then(Value::as_i64),
            FieldMapping::Typed(typed) => typed.length,
        }
    }

    /// Declared numeric precision, integers only.
    pub fn precision(&self) -> Option<i64> {
        match self {
            FieldMapping::Raw(value) => raw_get(value, "precision").and_then(Value::as_i64),
            FieldMapping::Typed(typed) => typed.precision,
        }
    }

    /// Nullability flag, false when absent.
    pub fn nullable(&self) -> bool {
        match self {
            FieldMapping::Raw(value) => raw_get(value, "nullable").is_some_and(json_truthy),
            FieldMapping::Typed(typed) => typed.nullable,
        }
    }

    /// Free-text comment from the mapping options; empty when absent or
    /// not a string.
    pub fn comment(&self) -> String {
        match self {
            FieldMapping::Raw(value) => option_str(value, "comment").unwrap_or_default(),
            FieldMapping::Typed(typed) => typed.comment.clone().unwrap_or_default(),
        }
    }

    /// Default value from the mapping options, resolved to a display-safe
    /// variant.
    pub fn default_value(&self) -> DefaultValue {
        match self {
            FieldMapping::Raw(value) => match option_get(value, "default") {
                Some(default) => resolve_default(default),
                None => DefaultValue::None,
            },
            FieldMapping::Typed(typed) => match &typed.default {
                Some(DefaultSpec::Value(value)) => resolve_default(value),
                Some(DefaultSpec::EnumCase { name, value }) => DefaultValue::EnumValue(
                    value
                        .as_ref()
                        .and_then(scalar_display)
                        .unwrap_or_else(|| name.clone()),
                ),
                None => DefaultValue::None,
            },
        }
    }

    /// Enum descriptor, when the mapping declares an enum type with
    /// resolvable cases. A bare type name without a case list is treated
    /// like an unresolvable type and dropped.
    pub fn enum_info(&self) -> Option<EnumInfo> {
        match self {
            FieldMapping::Raw(value) => {
                let spec = raw_get(value, "enumType")?.as_object()?;
                let type_name = spec.get("name")?.as_str()?.to_string();
                let values = spec
                    .get("cases")
                    .and_then(Value::as_array)
                    .map(|cases| cases.iter().map(case_display).collect())
                    .unwrap_or_default();
                Some(EnumInfo { type_name, values })
            }
            FieldMapping::Typed(typed) => typed.enum_type.as_ref().map(|spec| EnumInfo {
                type_name: spec.name.clone(),
                values: spec
                    .cases
                    .iter()
                    .map(|case| {
                        case.value
                            .as_ref()
                            .and_then(scalar_display)
                            .unwrap_or_else(|| case.name.clone())
                    })
                    .collect(),
            }),
        }
    }
}

/// Strongly-typed field mapping for in-process construction.
#[derive(Debug, Clone, Default)]
pub struct TypedFieldMapping {
    pub type_name: Option<String>,
    pub length: Option<i64>,
    pub precision: Option<i64>,
    pub nullable: bool,
    pub comment: Option<String>,
    pub default: Option<DefaultSpec>,
    pub enum_type: Option<EnumSpec>,
}

impl TypedFieldMapping {
    /// Create a mapping with the given raw type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// Set the column length.
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the numeric precision.
    pub fn with_precision(mut self, precision: i64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Mark the column nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: DefaultSpec) -> Self {
        self.default = Some(default);
        self
    }

    /// Attach an enum type descriptor.
    pub fn with_enum_type(mut self, spec: EnumSpec) -> Self {
        self.enum_type = Some(spec);
        self
    }
}

/// Default value of a typed mapping.
#[derive(Debug, Clone)]
pub enum DefaultSpec {
    /// Plain value (scalar or object).
    Value(Value),
    /// Enum case - displays as its backing value, or its name.
    EnumCase { name: String, value: Option<Value> },
}

/// Enum type descriptor of a typed mapping.
#[derive(Debug, Clone)]
pub struct EnumSpec {
    pub name: String,
    pub cases: Vec<EnumCase>,
}

/// One case of an enum type.
#[derive(Debug, Clone)]
pub struct EnumCase {
    pub name: String,
    pub value: Option<Value>,
}

impl EnumCase {
    /// A valueless case.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// A case backed by a value.
    pub fn backed(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Resolve an arbitrary default value into a display-safe variant.
fn resolve_default(value: &Value) -> DefaultValue {
    match value {
        Value::Null => DefaultValue::None,
        Value::String(s) => DefaultValue::Scalar(s.clone()),
        Value::Number(n) => DefaultValue::Scalar(n.to_string()),
        Value::Bool(b) => DefaultValue::Scalar(b.to_string()),
        // Compact JSON is the best-effort string form for structured values.
        other => DefaultValue::ObjectDisplay(other.to_string()),
    }
}

/// Display form of one raw enum case: its value, else its name.
fn case_display(case: &Value) -> String {
    if let Some(value) = raw_get(case, "value").and_then(scalar_display) {
        return value;
    }
    raw_str(case, "name").unwrap_or_else(|| "unknown".to_string())
}

/// Coerce a scalar JSON value to its display string. `None` for nulls and
/// structured values.
pub(crate) fn scalar_display(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Loose boolean coercion for untyped flags: empty strings, zero and `"0"`
/// are false, everything else follows its non-emptiness.
pub(crate) fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
    }
}

/// Fetch a key from a raw mapping object; `None` when the mapping is not an
/// object.
pub(crate) fn raw_get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key)
}

/// Fetch a string key from a raw mapping object.
pub(crate) fn raw_str(value: &Value, key: &str) -> Option<String> {
    raw_get(value, key)?.as_str().map(str::to_string)
}

/// Fetch a key from the mapping's `options` object.
fn option_get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    raw_get(value, "options")?.as_object()?.get(key)
}

/// Fetch a string key from the mapping's `options` object.
fn option_str(value: &Value, key: &str) -> Option<String> {
    option_get(value, key)?.as_str().map(str::to_string)
}
