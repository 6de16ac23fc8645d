// Package documentation search tool

use crate::backend::Backend;
use crate::protocol::ToolSchema;
use crate::tools::{Tool, ToolError};
use pkgdocs_core::{DocSearchArgs, ToolArguments};
use serde_json::Value;
use std::sync::Arc;

pub const PACKAGE_DOC_SEARCH: &str = "package_doc_search";

/// Tool to search the documentation of a single package
pub struct PackageDocSearchTool {
    backend: Arc<dyn Backend>,
}

impl PackageDocSearchTool {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl Tool for PackageDocSearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: PACKAGE_DOC_SEARCH.to_string(),
            description: "Search the documentation of a package. Returns matching documentation \
                          sections for the given package; without a query, returns an overview."
                .to_string(),
            input_schema: DocSearchArgs::shape().to_json_schema(),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let args = DocSearchArgs::parse(&arguments)?;
        tracing::debug!(package = %args.package_name, query = %args.query, "Searching documentation");

        Ok(self
            .backend
            .fetch_documentation(&args.package_name, &args.query)
            .await?)
    }
}
