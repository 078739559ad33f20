//! Raw shapes of the three static JSON feeds. The registrar field names
//! (`CRS_SUBJ_DEPT_CD` and friends) stay confined to this module; everything
//! past the loader works with the `models` types.

use serde::Deserialize;

use crate::models::{AvailabilityTerm, Course, Department, InterestCategory};

#[derive(Debug, Clone, Deserialize)]
pub struct RawCourse {
    #[serde(default)]
    pub id: String,
    pub subj: String,
    pub nbr: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, rename = "descrLong")]
    pub descr_long: String,
    #[serde(default, rename = "crseCatalogNbr")]
    pub crse_catalog_nbr: String,
    #[serde(default)]
    pub areas: Vec<String>,
    pub department: RawDepartment,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, rename = "openTerms")]
    pub open_terms: Vec<RawTerm>,
    /// Year codes arrive as strings in the feed.
    #[serde(default, rename = "firstApprovalYearCode")]
    pub first_approval_year_code: String,
    #[serde(default, rename = "lastApprovalYearCode")]
    pub last_approval_year_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDepartment {
    #[serde(rename = "CRS_SUBJ_DEPT_CD")]
    pub dept_cd: String,
    #[serde(default, rename = "CRS_SUBJ_DESC")]
    pub subj_desc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTerm {
    pub code: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInterest {
    pub value: String,
    pub label: String,
}

impl From<RawCourse> for Course {
    fn from(raw: RawCourse) -> Self {
        let id = if raw.id.is_empty() {
            format!("{} {}", raw.subj, raw.nbr)
        } else {
            raw.id
        };
        Course {
            id,
            subject: raw.subj,
            number: raw.nbr,
            short_description: raw.desc,
            long_description: raw.descr_long,
            catalog_number: raw.crse_catalog_nbr,
            areas: raw.areas,
            department: raw.department.into(),
            interests: raw.interests,
            availability: raw.open_terms.into_iter().map(Into::into).collect(),
            first_approval_year: raw.first_approval_year_code.parse().unwrap_or(0),
            last_approval_year: raw
                .last_approval_year_code
                .and_then(|code| code.parse().ok()),
        }
    }
}

impl From<RawDepartment> for Department {
    fn from(raw: RawDepartment) -> Self {
        Department {
            code: raw.dept_cd,
            name: raw.subj_desc,
        }
    }
}

impl From<RawTerm> for AvailabilityTerm {
    fn from(raw: RawTerm) -> Self {
        AvailabilityTerm {
            code: raw.code,
            label: raw.label,
        }
    }
}

impl From<RawInterest> for InterestCategory {
    fn from(raw: RawInterest) -> Self {
        InterestCategory {
            value: raw.value,
            label: raw.label,
        }
    }
}
