//! `final_answer` tool — terminal answer echo.
//!
//! The agent loop calls this to hand its conclusion back to the host.
//! The tool does no work: it validates the call and returns the
//! supplied answer unchanged (strings verbatim, other JSON values
//! serialized). Declaring it as a tool keeps the stop condition inside
//! the same schema-described contract as everything else.

use skimmer_domain::tool::{
    contract::Tool,
    entities::{ToolCall, ToolDefinition, ToolParameter},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};

use async_trait::async_trait;

/// Canonical tool name for the final answer tool
pub const FINAL_ANSWER: &str = "final_answer";

/// Create the [`ToolDefinition`] for `final_answer`
pub fn final_answer_definition() -> ToolDefinition {
    ToolDefinition::new(
        FINAL_ANSWER,
        "Provides a final answer to the given problem.",
        "any",
    )
    .with_parameter(
        ToolParameter::new("answer", "The final answer to the problem", true).with_type("any"),
    )
}

/// Tool that echoes the agent's final answer
pub struct FinalAnswerTool {
    definition: ToolDefinition,
}

impl FinalAnswerTool {
    pub fn new() -> Self {
        Self {
            definition: final_answer_definition(),
        }
    }
}

impl Default for FinalAnswerTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for FinalAnswerTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, call: &ToolCall) -> ToolResult {
        if let Err(e) = DefaultToolValidator.validate(call, &self.definition) {
            return ToolResult::failure(FINAL_ANSWER, ToolError::invalid_argument(e));
        }
        let answer = match call.require_value("answer") {
            Ok(v) => v,
            Err(e) => {
                return ToolResult::failure(FINAL_ANSWER, ToolError::invalid_argument(e));
            }
        };

        let output = match answer.as_str() {
            Some(text) => text.to_string(),
            None => answer.to_string(),
        };
        ToolResult::success(FINAL_ANSWER, output)
    }
}
