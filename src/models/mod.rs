pub mod tool;

pub use tool::{ArgSpec, ResponseField, ToolSpec};
