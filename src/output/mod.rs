pub mod formatter;

pub use formatter::{format_breakdown, format_json, format_result, should_use_colors};
