mod output;

pub use output::{
    display_banner, display_failures, display_result, display_tools, format_mapping,
    format_result, format_value,
};
