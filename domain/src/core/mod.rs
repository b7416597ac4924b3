//! Core domain concepts shared across all subdomains.
//!
//! - [`credential::Credential`]: the secret that authorizes service calls
//! - [`model::Model`]: generative models the search can run on
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod model;
