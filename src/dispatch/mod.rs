mod extractor;
mod matcher;
mod merger;
mod result;
mod runner;

pub use extractor::{extract_from_text, ParameterExtractor};
pub use matcher::match_tools;
pub use merger::merge;
pub use result::{DispatchResult, ToolFailure};
pub use runner::Dispatcher;
