use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DispatchConfig {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_message: Option<String>,

    // Merged over the built-in extraction defaults
    #[serde(default)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub defaults: HashMap<String, String>,
}
