// Package search tool

use crate::backend::Backend;
use crate::protocol::ToolSchema;
use crate::tools::{Tool, ToolError};
use pkgdocs_core::{PackageSearchArgs, ToolArguments};
use serde_json::Value;
use std::sync::Arc;

pub const PACKAGE_SEARCH: &str = "package_search";

/// Tool to find packages from a free-text description
pub struct PackageSearchTool {
    backend: Arc<dyn Backend>,
}

impl PackageSearchTool {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl Tool for PackageSearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: PACKAGE_SEARCH.to_string(),
            description: "Search for packages matching a description of what you need. \
                          Returns up to max_results packages (default 10, at most 100)."
                .to_string(),
            input_schema: PackageSearchArgs::shape().to_json_schema(),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let args = PackageSearchArgs::parse(&arguments)?;
        tracing::debug!(query = %args.query, max_results = args.max_results, "Searching packages");

        Ok(self
            .backend
            .fetch_packages(&args.query, args.max_results)
            .await?)
    }
}
