pub mod args;
pub mod commands;
pub mod context;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use commands::Commands;
pub use context::CliContext;
pub use output::{CliColors, format_error, format_info, format_success, format_warning, output_error};
