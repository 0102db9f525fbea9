//! Tool-invocation adapter.
//!
//! A minimal tool surface for embedding hosts: a name, a description, and
//! a zero-parameter call returning a string. The dictionary tool delegates
//! to the query façade verbatim.

use crate::metadata::SchemaSource;
use crate::service::EntityService;

/// A zero-parameter, string-returning tool.
pub trait Tool {
    /// Tool name as exposed to the host.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Execute the tool.
    fn call(&self) -> String;
}

/// Returns the full database dictionary as Markdown.
pub struct GetDatabaseDictionary<S: SchemaSource> {
    service: EntityService<S>,
}

impl<S: SchemaSource> GetDatabaseDictionary<S> {
    /// Create the tool over the given service.
    pub fn new(service: EntityService<S>) -> Self {
        Self { service }
    }
}

impl<S: SchemaSource> Tool for GetDatabaseDictionary<S> {
    fn name(&self) -> &str {
        "GetDatabaseDictionary"
    }

    fn description(&self) -> &str {
        "返回完整的数据库字典，包含所有实体的表名、字段定义和关联关系"
    }

    fn call(&self) -> String {
        self.service.generate_database_markdown()
    }
}
