use std::collections::HashMap;

use crate::config::default_extraction_values;

/// Words whose successor is taken as the value ("age of john").
const LEAD_WORDS: &[&str] = &["of", "for", "about"];
/// Words that may follow the argument name ("name is john").
const LINK_WORDS: &[&str] = &["is", "of", "for"];
/// Words that may precede the argument name ("with name john").
const INTRO_WORDS: &[&str] = &["for", "about", "with"];

/// Best-effort slot filler that pulls argument values out of free text.
///
/// It never fails: when no heuristic applies the value comes from the
/// default table, or is empty.
#[derive(Debug, Clone)]
pub struct ParameterExtractor {
    defaults: HashMap<String, String>,
}

impl Default for ParameterExtractor {
    fn default() -> Self {
        Self::new(default_extraction_values())
    }
}

impl ParameterExtractor {
    pub fn new(defaults: HashMap<String, String>) -> Self {
        Self { defaults }
    }

    pub fn extract(&self, input: &str, arg_name: &str) -> String {
        extract_from_text(input, arg_name)
            .unwrap_or_else(|| self.defaults.get(arg_name).cloned().unwrap_or_default())
    }
}

/// The heuristics alone, without the default table.
pub fn extract_from_text(input: &str, arg_name: &str) -> Option<String> {
    let lowered = input.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let arg_name = arg_name.to_lowercase();

    // "age of john"
    for pair in tokens.windows(2) {
        if LEAD_WORDS.contains(&pair[0]) {
            return Some(pair[1].to_string());
        }
    }

    for triple in tokens.windows(3) {
        // "name is john"
        if triple[0] == arg_name && LINK_WORDS.contains(&triple[1]) {
            return Some(triple[2].to_string());
        }
        // "with name john"
        if INTRO_WORDS.contains(&triple[0]) && triple[1] == arg_name {
            return Some(triple[2].to_string());
        }
    }

    None
}
