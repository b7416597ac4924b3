//! Job query and request value objects

use super::category::JobCategory;
use crate::prompt::JobPromptTemplate;
use serde::{Deserialize, Serialize};

/// Derived search-query text for a category (Value Object)
///
/// This is the only cache identity for search results. It never carries
/// any part of the credential or the service handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobQuery(String);

impl JobQuery {
    pub fn for_category(category: JobCategory) -> Self {
        Self(category.search_query().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully-formed request for one category: the cache key plus the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub category: JobCategory,
    pub query: JobQuery,
    pub prompt: String,
}

impl JobRequest {
    /// Build the request for a category.
    ///
    /// Pure and deterministic: the same category always yields a
    /// byte-identical prompt.
    pub fn build(category: JobCategory) -> Self {
        let query = JobQuery::for_category(category);
        let prompt = JobPromptTemplate::job_search(&query);
        Self {
            category,
            query,
            prompt,
        }
    }
}
