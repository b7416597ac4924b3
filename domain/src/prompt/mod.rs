//! Prompt domain
//!
//! The fixed template that turns a job query into a search prompt.

mod template;

pub use template::JobPromptTemplate;
