//! Domain layer for jobscout
//!
//! This crate contains the core value objects and the session state machine.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Job categories
//!
//! The user picks one of three fixed [`JobCategory`] values. Each maps to a
//! fixed search query ([`JobQuery`]) and, through [`JobPromptTemplate`], to a
//! deterministic prompt asking the model for a markdown table of postings.
//!
//! ## Session
//!
//! [`SessionState`] models the single-page form: `NoCredential` → `Ready` →
//! `ResultShown`, with explicit transition functions that return new states.

pub mod core;
pub mod job;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use core::{credential::Credential, error::DomainError, model::Model};
pub use job::{
    category::JobCategory,
    query::{JobQuery, JobRequest},
    result::SearchResult,
};
pub use prompt::JobPromptTemplate;
pub use session::{
    notice::{Notice, NoticeLevel},
    state::{RegatePolicy, SessionState},
};
