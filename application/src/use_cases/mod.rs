//! Use cases (application services)
//!
//! - [`session::SessionController`]: drives one interactive session of the form

pub mod session;
