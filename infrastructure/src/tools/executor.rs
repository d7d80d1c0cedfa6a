//! Web tool executor — the concrete implementation of `ToolExecutorPort`.
//!
//! [`WebToolExecutor`] owns the tool instances and the aggregate
//! [`ToolSpec`], routes each [`ToolCall`] to its tool by name, and
//! stamps execution timing. Argument validation happens inside each
//! tool's `invoke`, so direct `Tool` users get the same contract as
//! port users.

use async_trait::async_trait;
use skimmer_application::ports::tool_executor::ToolExecutorPort;
use skimmer_domain::tool::{
    contract::Tool,
    entities::{ToolCall, ToolSpec},
    value_objects::{ToolError, ToolResult},
};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::config::FileConfig;
use skimmer_domain::search::provider::SearchError;

/// Executor exposing the web tool set to the agent host.
///
/// | Constructor | Tools | Use Case |
/// |-------------|-------|----------|
/// | [`from_config()`](Self::from_config) | `web_search`, `web_fetch`, `final_answer` | Standard wiring |
/// | [`with_tools()`](Self::with_tools) | Custom set | Testing / specialized setups |
#[derive(Clone)]
pub struct WebToolExecutor {
    /// Catalog advertised to the model
    tool_spec: ToolSpec,
    /// Tool instances, routed by name
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl WebToolExecutor {
    /// Create an executor with the default tool set from configuration
    pub fn from_config(config: &FileConfig) -> Result<Self, SearchError> {
        Ok(Self::with_tools(super::default_tool_set(config)?))
    }

    /// Create an executor over an explicit tool set
    pub fn with_tools(tools: Vec<Arc<dyn Tool>>) -> Self {
        let mut tool_spec = ToolSpec::new();
        let mut by_name = HashMap::new();
        for tool in tools {
            tool_spec = tool_spec.register(tool.definition().clone());
            by_name.insert(tool.name().to_string(), tool);
        }
        Self {
            tool_spec,
            tools: by_name,
        }
    }
}

#[async_trait]
impl ToolExecutorPort for WebToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(tool) = self.tools.get(&call.tool_name) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("Unknown tool: {}", call.tool_name)),
            );
        };

        let start = Instant::now();
        let mut result = tool.invoke(call).await;
        if result.metadata.duration_ms.is_none() {
            result.metadata.duration_ms = Some(start.elapsed().as_millis() as u64);
        }
        result
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        // Web tools need an async runtime — bridge from the current one
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            tokio::task::block_in_place(|| handle.block_on(self.execute(call)))
        } else {
            ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed("Web tools require an async runtime".to_string()),
            )
        }
    }
}
