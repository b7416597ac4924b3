//! Job search subdomain
//!
//! - [`category::JobCategory`]: the three fixed job-title categories
//! - [`query::JobQuery`] / [`query::JobRequest`]: derived query text and prompt
//! - [`result::SearchResult`]: the latest rendered answer

pub mod category;
pub mod query;
pub mod result;
