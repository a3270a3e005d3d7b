use serde_json::{Map, Value};

use crate::tools::ToolOutput;

/// A tool whose output could not be merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolFailure {
    pub tool: String,
    pub reason: String,
}

impl ToolFailure {
    /// Describe why `output` was left out of a merge, if it was.
    pub fn from_output(tool: &str, output: &ToolOutput) -> Option<Self> {
        let reason = match output {
            ToolOutput::Mapping(_) => return None,
            ToolOutput::Error(message) => message.clone(),
            ToolOutput::Value(value) => format!("Response is not a JSON object: {}", value),
        };
        Some(Self {
            tool: tool.to_string(),
            reason,
        })
    }
}

/// The answer to one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResult {
    /// Exactly one tool matched; its output as-is.
    Single { tool: String, output: ToolOutput },
    /// Several tools ran and their mappings were merged.
    Merged {
        values: Map<String, Value>,
        failures: Vec<ToolFailure>,
    },
    /// Nothing usable came back.
    Fallback(String),
}

impl DispatchResult {
    /// The mapping carried by this result, if any.
    pub fn mapping(&self) -> Option<&Map<String, Value>> {
        match self {
            DispatchResult::Single { output, .. } => output.as_mapping(),
            DispatchResult::Merged { values, .. } => Some(values),
            DispatchResult::Fallback(_) => None,
        }
    }

    pub fn failures(&self) -> &[ToolFailure] {
        match self {
            DispatchResult::Merged { failures, .. } => failures,
            _ => &[],
        }
    }
}
