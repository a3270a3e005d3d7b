mod client;
mod description;
mod url;

use log::{debug, warn};
use reqwest::Client;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::HttpSettings;
use crate::error::{Result, RouterError};
use crate::models::ToolSpec;
use crate::registry::ToolRegistry;

pub use client::build_http_client;
pub use description::render_description;
pub use url::build_url;

/// Values handed to a tool, bound to its declared arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArgs {
    /// Bound to the declared args in order; extra values are ignored.
    Positional(Vec<String>),
    /// Bound by name; names the tool does not declare are ignored.
    Keyword(Vec<(String, String)>),
}

impl ToolArgs {
    pub fn none() -> Self {
        ToolArgs::Positional(Vec::new())
    }
}

/// Outcome of one tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Mapping(Map<String, Value>),
    /// Well-formed JSON that is not an object
    Value(Value),
    Error(String),
}

impl ToolOutput {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => ToolOutput::Mapping(map),
            other => ToolOutput::Value(other),
        }
    }

    pub fn as_mapping(&self) -> Option<&Map<String, Value>> {
        match self {
            ToolOutput::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutput::Error(_))
    }
}

/// An invocable tool bound to one declared endpoint.
#[derive(Debug, Clone)]
pub struct Tool {
    spec: Arc<ToolSpec>,
    description: String,
    client: Client,
    timeout: Duration,
}

impl Tool {
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Pair each supplied value with its declared argument name.
    pub fn bind(&self, args: &ToolArgs) -> Vec<(String, String)> {
        match args {
            ToolArgs::Positional(values) => self
                .spec
                .args
                .iter()
                .zip(values)
                .map(|(arg, value)| (arg.name.clone(), value.clone()))
                .collect(),
            ToolArgs::Keyword(pairs) => pairs
                .iter()
                .filter(|(name, _)| self.spec.has_arg(name))
                .cloned()
                .collect(),
        }
    }

    pub fn url_for(&self, args: &ToolArgs) -> String {
        build_url(&self.spec.endpoint, &self.bind(args))
    }

    /// Perform one GET against the bound URL. Failures of any kind come back
    /// as `ToolOutput::Error` rather than as an `Err`.
    pub async fn invoke(&self, args: &ToolArgs) -> ToolOutput {
        let url = self.url_for(args);
        debug!("[{}] GET {}", self.id(), url);

        let result = match timeout(self.timeout, self.fetch(&url)).await {
            Ok(result) => result,
            Err(_) => Err(RouterError::Timeout(self.timeout)),
        };

        match result {
            Ok(value) => ToolOutput::from_json(value),
            Err(e) => {
                warn!("[{}] failed: {}", self.id(), e);
                ToolOutput::Error(format!("Error calling API: {}", e))
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RouterError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Turns declarations into invocable tools sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct ToolFactory {
    client: Client,
    timeout: Duration,
}

impl ToolFactory {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        Ok(Self {
            client: build_http_client(settings)?,
            timeout: settings.timeout,
        })
    }

    pub fn create(&self, spec: ToolSpec) -> Tool {
        let description = render_description(&spec);
        Tool {
            spec: Arc::new(spec),
            description,
            client: self.client.clone(),
            timeout: self.timeout,
        }
    }

    /// One tool per declaration, in registry order.
    pub fn create_all(&self, registry: &ToolRegistry) -> Vec<Tool> {
        registry
            .specs()
            .iter()
            .cloned()
            .map(|spec| self.create(spec))
            .collect()
    }
}
