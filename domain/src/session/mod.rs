//! Session subdomain
//!
//! The per-session state machine behind the single-page form and the
//! user-visible notices it emits.

pub mod notice;
pub mod state;
