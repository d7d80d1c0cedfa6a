//! Tool domain traits
//!
//! Contains pure domain logic traits for tool call validation.
//! The executable [`Tool`](super::contract::Tool) contract lives in
//! [`contract`](super::contract); the async `ToolExecutorPort` is
//! defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Checks argument names and coarse types against the declared schema.
/// A mismatch is an error reported to the caller, never a silent
/// coercion.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        // Check that all required parameters are present
        for param in &definition.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        // Check that all provided arguments are declared and well-typed
        for (arg_name, value) in &call.arguments {
            let Some(param) = definition.parameter(arg_name) else {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            };
            if !type_matches(&param.param_type, value) {
                return Err(format!(
                    "Parameter '{}' for tool '{}' expects type '{}'",
                    arg_name, definition.name, param.param_type
                ));
            }
        }

        Ok(())
    }
}

/// Coarse JSON-kind check against a declared parameter type.
///
/// Unknown type hints are accepted rather than rejected, so a definition
/// with an exotic hint does not make the tool uncallable.
fn type_matches(param_type: &str, value: &serde_json::Value) -> bool {
    match param_type {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "any" => true,
        _ => true,
    }
}
