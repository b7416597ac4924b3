//! TUI (Text User Interface) module for jobscout
//!
//! The single-page search form: a sidebar with the credential field and the
//! category selector, a result pane, and a status bar for notices.

mod app;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use keys::{FormAction, map_key};
pub use state::{Focus, FormEffect, FormState};
pub use widgets::{
    FormLayout, help::HelpWidget, result_pane::ResultPaneWidget, sidebar::SidebarWidget,
    status_bar::StatusBarWidget,
};
