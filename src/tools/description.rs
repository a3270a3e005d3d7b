use crate::models::ToolSpec;

/// Human-readable description of a tool: its summary, then an `Args:` block
/// and a `Returns:` block when those lists are non-empty.
pub fn render_description(spec: &ToolSpec) -> String {
    let mut description = spec.display_name();

    if !spec.args.is_empty() {
        description.push_str("\n\nArgs:");
        for arg in &spec.args {
            description.push_str(&format!("\n    {}: {}", arg.name, arg.description_or_default()));
        }
    }

    if !spec.response.is_empty() {
        description.push_str(if spec.args.is_empty() { "\n\n" } else { "\n" });
        description.push_str("Returns:");
        for field in &spec.response {
            description.push_str(&format!("\n    {}: {}", field.name, field.description));
        }
    }

    description
}
