use serde::{Deserialize, Serialize};

/// Separator between the words of a tool id.
pub const ID_SEPARATOR: char = '_';

/// Declarative description of one remote data-fetching tool.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToolSpec {
    pub id: String,

    #[serde(default, alias = "kwargs")]
    pub args: Vec<ArgSpec>,

    #[serde(alias = "url")]
    pub endpoint: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Documentation only, never checked against real responses
    #[serde(default, alias = "responseFields", alias = "response_fields")]
    pub response: Vec<ResponseField>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArgSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResponseField {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ToolSpec {
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            args: Vec::new(),
            endpoint: endpoint.into(),
            description: None,
            response: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_arg(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.args.push(ArgSpec {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    pub fn with_response_field(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.response.push(ResponseField {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Lowercase keyword tokens of the id. Empty tokens are dropped since
    /// an empty needle is a substring of every input.
    pub fn keywords(&self) -> Vec<String> {
        self.id
            .split(ID_SEPARATOR)
            .filter(|token| !token.is_empty())
            .map(|token| token.to_lowercase())
            .collect()
    }

    /// The declared description, or the id rendered as a sentence
    /// ("get_facts_about_cats" -> "Get facts about cats").
    pub fn display_name(&self) -> String {
        if let Some(description) = self.description.as_deref() {
            if !description.trim().is_empty() {
                return description.to_string();
            }
        }

        let spaced = self.id.replace(ID_SEPARATOR, " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn arg_names(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|arg| arg.name.as_str())
    }

    pub fn has_arg(&self, name: &str) -> bool {
        self.args.iter().any(|arg| arg.name == name)
    }
}

impl ArgSpec {
    pub fn description_or_default(&self) -> String {
        if self.description.is_empty() {
            format!("The {} parameter", self.name)
        } else {
            self.description.clone()
        }
    }
}
