use regex::Regex;
use std::env;
use std::sync::OnceLock;

use crate::models::ToolSpec;

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

/// Expand environment variables in a string using ${VAR_NAME} syntax.
/// Unset variables are left as-is.
pub fn expand_env_var_in_string(value: &str) -> String {
    expand_with(value, |name| env::var(name).ok())
}

pub fn expand_with<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_var_pattern()
        .replace_all(value, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Expand ${VAR} references in every tool endpoint
pub fn expand_tool_endpoints(tools: &mut [ToolSpec]) {
    for tool in tools.iter_mut() {
        tool.endpoint = expand_env_var_in_string(&tool.endpoint);
    }
}
