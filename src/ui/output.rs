use colored::*;
use serde_json::{Map, Value};

use crate::dispatch::{DispatchResult, ToolFailure};
use crate::tools::{Tool, ToolOutput};

/// Strings are shown without quotes, everything else as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `key: value, key: value` in mapping order
pub fn format_mapping(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| format!("{}: {}", key, format_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_result(result: &DispatchResult) -> String {
    match result {
        DispatchResult::Single { output, .. } => match output {
            ToolOutput::Mapping(map) => format_mapping(map),
            ToolOutput::Value(value) => format_value(value),
            ToolOutput::Error(message) => message.clone(),
        },
        DispatchResult::Merged { values, .. } => format_mapping(values),
        DispatchResult::Fallback(message) => message.clone(),
    }
}

pub fn display_banner(tool_count: usize) {
    println!("{}", "Multi-Tool Assistant".bold());
    println!(
        "{}",
        format!("{} tools available. Type 'exit' to quit", tool_count).dimmed()
    );
}

/// Print a dispatch result, with dropped tools listed on stderr.
pub fn display_result(result: &DispatchResult) {
    let text = format_result(result);
    let text = match result {
        DispatchResult::Single {
            output: ToolOutput::Error(_),
            ..
        } => text.red().to_string(),
        DispatchResult::Fallback(_) => text.yellow().to_string(),
        _ => text,
    };
    println!("\n{} {}", "Assistant:".cyan().bold(), text);
    display_failures(result.failures());
}

pub fn display_failures(failures: &[ToolFailure]) {
    for failure in failures {
        eprintln!(
            "{}",
            format!("[dispatch] {} skipped: {}", failure.tool, failure.reason).dimmed()
        );
    }
}

pub fn display_tools(tools: &[Tool]) {
    for tool in tools {
        println!("{}", tool.id().cyan().bold());
        for line in tool.description().lines() {
            println!("  {}", line);
        }
        println!("  {}", format!("endpoint: {}", tool.spec().endpoint).dimmed());
        println!();
    }
}
