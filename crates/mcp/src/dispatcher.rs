// Routes tool calls to tools and wraps every outcome in the response envelope

use crate::protocol::{CallToolParams, CallToolResult, ListToolsResult};
use crate::tools::ToolRegistry;
use std::sync::Arc;
use tracing::{info, warn};

/// Stateless per call: concurrent `handle` calls share only the read-only
/// registry.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Schemas of every registered tool, in registration order.
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.registry.list_schemas(),
        }
    }

    /// Run one tool call. Failures come back as the `{"error": ...}`
    /// envelope, never as an `Err`.
    pub async fn handle(&self, request: CallToolParams) -> CallToolResult {
        let Some(tool) = self.registry.get(&request.name) else {
            warn!(tool = %request.name, "Unknown tool");
            return CallToolResult::failure(format!("Unknown tool: {}", request.name));
        };

        info!(tool = %request.name, "Calling tool");
        match tool.execute(request.arguments).await {
            Ok(result) => CallToolResult::success(&result),
            Err(e) => {
                warn!(tool = %request.name, error = %e, "Tool call failed");
                CallToolResult::failure(e.to_string())
            }
        }
    }
}
