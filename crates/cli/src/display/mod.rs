mod formatter;

pub use formatter::{print_plan, print_report};
