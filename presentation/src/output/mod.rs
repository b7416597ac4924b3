//! Output formatting for headless mode

pub mod console;
