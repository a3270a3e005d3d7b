use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::defaults::{default_user_agent, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_invalid_certs: Option<bool>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Resolved transport settings shared by every tool.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
            user_agent: default_user_agent(),
        }
    }
}
