//! Presentation layer for jobscout
//!
//! This crate contains the CLI definitions, the console formatter,
//! the headless progress spinner, and the interactive single-page form.

pub mod cli;
pub mod headless;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use headless::run_once;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SearchSpinner;
pub use tui::TuiApp;
