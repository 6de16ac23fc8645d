// Tool trait and the registry advertised on discovery

use crate::backend::Backend;
use crate::protocol::ToolSchema;
use crate::tools::{PackageDocSearchTool, PackageSearchTool};
use pkgdocs_core::ValidationError;
use pkgdocs_sdk::SdkError;
use serde_json::Value;
use std::sync::Arc;

/// Why a tool call did not produce a backend result.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Arguments failed validation; the backend was not called.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),

    /// The backend call failed.
    #[error(transparent)]
    Backend(#[from] SdkError),
}

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Validate the arguments, then call the backend
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError>;
}

/// Tool registry for managing available tools
///
/// Keeps registration order, which is the order tools are listed in.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<(String, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry holding the standard catalog, all backed by `backend`.
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PackageDocSearchTool::new(backend.clone())));
        registry.register(Arc::new(PackageSearchTool::new(backend)));
        registry
    }

    /// Register a tool. A tool with the same name replaces the old one in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.tools.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = tool,
            None => self.tools.push((name, tool)),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.clone())
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|(_, t)| t.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubBackend;
    use serde_json::json;

    struct EchoTool {
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".to_string(),
                description: self.description.to_string(),
                input_schema: json!({"type": "object"}),
            }
        }

        async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
            Ok(arguments)
        }
    }

    #[test]
    fn test_standard_catalog_order() {
        let registry = ToolRegistry::with_backend(Arc::new(StubBackend::ok(json!({}))));

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["package_doc_search", "package_search"]);
        assert!(registry.contains("package_search"));
        assert!(!registry.contains("web_fetch"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(EchoTool { description: "first" }));
        registry.register(Arc::new(EchoTool { description: "second" }));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("echo").unwrap().schema().description, "second");
    }

    #[test]
    fn test_get_unknown_tool() {
        let registry = ToolRegistry::new();
        assert!(registry.get("missing").is_none());
    }
}
