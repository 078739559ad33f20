use serde::{Deserialize, Serialize};

/// A single GenEd course as loaded from the catalog feed. Courses are
/// read-only for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub subject: String,
    pub number: String,
    pub short_description: String,
    pub long_description: String,
    pub catalog_number: String,
    /// Area codes are a list even when a course carries only one; combined
    /// codes like `NM|NS` appear verbatim, as in the feed.
    pub areas: Vec<String>,
    pub department: Department,
    pub interests: Vec<String>,
    pub availability: Vec<AvailabilityTerm>,
    pub first_approval_year: u32,
    pub last_approval_year: Option<u32>,
}

impl Course {
    /// `"BIOL 101"` style display key, also searched by the keyword filter.
    pub fn subject_number(&self) -> String {
        format!("{} {}", self.subject, self.number)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub code: String,
    pub name: String,
}

/// A term in which a course has open seats, e.g. `("4252", "Spring 2025")`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityTerm {
    pub code: String,
    pub label: String,
}

/// One entry of the explore-interests feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterestCategory {
    pub value: String,
    pub label: String,
}
