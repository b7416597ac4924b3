//! Job category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the fixed job-title categories offered to the user (Value Object)
///
/// Each category maps to a fixed search-query string. The set is closed:
/// the form only ever offers these three choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    #[default]
    MathTutor,
    Teacher,
    SchoolBusDriver,
}

impl JobCategory {
    /// All categories in display order
    pub const ALL: [JobCategory; 3] = [
        JobCategory::MathTutor,
        JobCategory::Teacher,
        JobCategory::SchoolBusDriver,
    ];

    /// Human-readable bilingual label shown in the selector and result header
    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::MathTutor => "Math Tutor (수학 튜터)",
            JobCategory::Teacher => "Teacher (교사)",
            JobCategory::SchoolBusDriver => "School Bus Driver (스쿨버스 기사)",
        }
    }

    /// Fixed search-query text for this category
    pub fn search_query(&self) -> &'static str {
        match self {
            JobCategory::MathTutor => "Austin TX math tutor jobs latest",
            JobCategory::Teacher => "Austin TX teacher jobs salary requirements latest",
            JobCategory::SchoolBusDriver => "Austin TX school bus driver jobs salary latest",
        }
    }

    /// Stable machine identifier (used by the CLI and config)
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::MathTutor => "math-tutor",
            JobCategory::Teacher => "teacher",
            JobCategory::SchoolBusDriver => "school-bus-driver",
        }
    }

    /// Position in [`JobCategory::ALL`]
    pub fn index(&self) -> usize {
        match self {
            JobCategory::MathTutor => 0,
            JobCategory::Teacher => 1,
            JobCategory::SchoolBusDriver => 2,
        }
    }

    /// Next category, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for JobCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for JobCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "math-tutor" | "tutor" | "math" => Ok(JobCategory::MathTutor),
            "teacher" => Ok(JobCategory::Teacher),
            "school-bus-driver" | "bus-driver" | "bus" => Ok(JobCategory::SchoolBusDriver),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}
