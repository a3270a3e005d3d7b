use log::debug;

use crate::tools::Tool;

/// Tools whose id shares at least one keyword with the input, in the order
/// the tools were given.
///
/// A keyword matches when it occurs anywhere in the lowercased input, so
/// `cats` needs the literal text "cats" and short words such as `a` or `of`
/// will match most sentences.
pub fn match_tools<'a>(input: &str, tools: &'a [Tool]) -> Vec<&'a Tool> {
    let input_lower = input.to_lowercase();

    tools
        .iter()
        .filter(|tool| {
            let hit = tool
                .spec()
                .keywords()
                .into_iter()
                .find(|keyword| input_lower.contains(keyword.as_str()));
            if let Some(keyword) = &hit {
                debug!("[match] {} via '{}'", tool.id(), keyword);
            }
            hit.is_some()
        })
        .collect()
}
