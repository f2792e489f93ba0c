//! Command-line interface module.

mod args;
pub mod macos;
pub mod preview;

pub use args::{Cli, Commands, MacosArgs, PreviewArgs};
