use futures::future::join_all;
use log::{debug, warn};

use super::extractor::ParameterExtractor;
use super::matcher::match_tools;
use super::merger::merge;
use super::result::{DispatchResult, ToolFailure};
use crate::config::{Config, DEFAULT_FALLBACK_MESSAGE};
use crate::error::Result;
use crate::registry::ToolRegistry;
use crate::tools::{Tool, ToolArgs, ToolFactory, ToolOutput};

/// Routes one line of input to the relevant tools and folds their answers
/// into a single result.
pub struct Dispatcher {
    tools: Vec<Tool>,
    extractor: ParameterExtractor,
    fallback_message: String,
}

impl Dispatcher {
    pub fn new(tools: Vec<Tool>, extractor: ParameterExtractor) -> Self {
        Self {
            tools,
            extractor,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Build tools for every declaration in `registry` using the resolved config.
    pub fn from_config(registry: &ToolRegistry, config: &Config) -> Result<Self> {
        let factory = ToolFactory::new(&config.http)?;
        let extractor = ParameterExtractor::new(config.extraction_defaults.clone());
        Ok(Self::new(factory.create_all(registry), extractor)
            .with_fallback_message(config.fallback_message.clone()))
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }

    /// Keyword arguments for `tool`, one per declared arg, pulled from `input`.
    pub fn arguments_for(&self, tool: &Tool, input: &str) -> ToolArgs {
        let pairs = tool
            .spec()
            .arg_names()
            .map(|name| {
                let value = self.extractor.extract(input, name);
                debug!("[extract] {}.{} = '{}'", tool.id(), name, value);
                (name.to_string(), value)
            })
            .collect();
        ToolArgs::Keyword(pairs)
    }

    pub async fn run(&self, input: &str) -> DispatchResult {
        let matched = match_tools(input, &self.tools);
        debug!("[dispatch] {} of {} tools matched", matched.len(), self.tools.len());

        match matched.as_slice() {
            [] => self.run_fallback(input).await,
            [tool] => {
                let output = tool.invoke(&self.arguments_for(tool, input)).await;
                DispatchResult::Single {
                    tool: tool.id().to_string(),
                    output,
                }
            }
            _ => {
                let (values, failures) = self.invoke_and_merge(&matched, input).await;
                DispatchResult::Merged { values, failures }
            }
        }
    }

    /// Nothing matched: try every tool and keep whatever succeeds.
    async fn run_fallback(&self, input: &str) -> DispatchResult {
        let every_tool: Vec<&Tool> = self.tools.iter().collect();
        let (values, failures) = self.invoke_and_merge(&every_tool, input).await;

        if values.is_empty() {
            DispatchResult::Fallback(self.fallback_message.clone())
        } else {
            DispatchResult::Merged { values, failures }
        }
    }

    /// Invoke all `tools` concurrently. Outputs are buffered and merged in the
    /// order of `tools`, whatever order the calls complete in.
    async fn invoke_and_merge(
        &self,
        tools: &[&Tool],
        input: &str,
    ) -> (serde_json::Map<String, serde_json::Value>, Vec<ToolFailure>) {
        let calls = tools.iter().map(|tool| {
            let args = self.arguments_for(tool, input);
            async move { tool.invoke(&args).await }
        });
        let outputs: Vec<ToolOutput> = join_all(calls).await;

        let failures: Vec<ToolFailure> = tools
            .iter()
            .zip(&outputs)
            .filter_map(|(tool, output)| ToolFailure::from_output(tool.id(), output))
            .collect();
        for failure in &failures {
            warn!("[dispatch] {} dropped from merge: {}", failure.tool, failure.reason);
        }

        let values = merge(outputs.iter().filter_map(ToolOutput::as_mapping));
        (values, failures)
    }
}
