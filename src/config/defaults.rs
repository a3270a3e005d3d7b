use std::collections::HashMap;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_FALLBACK_MESSAGE: &str = "I'm not sure what information you're looking for. You can ask for cat facts or age predictions.";

pub fn default_user_agent() -> String {
    format!("toolrouter/{}", env!("CARGO_PKG_VERSION"))
}

/// Stand-in argument values used when nothing can be pulled out of the input
pub fn default_extraction_values() -> HashMap<String, String> {
    let mut defaults = HashMap::new();
    defaults.insert("name".to_string(), "meelad".to_string());
    defaults
}
