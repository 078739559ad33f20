use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{AvailabilityTerm, Department, InterestCategory};

/// The distinct values available for each filter control, derived once per
/// catalog load. Pure function of the loaded data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FacetIndex {
    /// Departments that actually occur in the catalog, sorted by display name.
    pub departments: Vec<Department>,
    pub interests: Vec<InterestCategory>,
    /// Distinct first-approval year codes, most recent first.
    pub approval_years: Vec<u32>,
    /// Distinct open-seat terms, ascending by term code.
    pub terms: Vec<AvailabilityTerm>,
}

pub fn build_facet_index(
    catalog: &Catalog,
    departments: &[Department],
    interests: &[InterestCategory],
) -> FacetIndex {
    let course_depts: HashSet<&str> = catalog
        .courses()
        .iter()
        .map(|c| c.department.code.as_str())
        .collect();

    // The directory feed is much larger than the catalog; keep only the
    // departments a course actually references, first entry per code wins.
    let mut by_code: BTreeMap<&str, &Department> = BTreeMap::new();
    for dept in departments {
        if course_depts.contains(dept.code.as_str()) {
            by_code.entry(dept.code.as_str()).or_insert(dept);
        }
    }
    let mut depts: Vec<Department> = by_code.into_values().cloned().collect();
    depts.sort_by(|a, b| a.name.cmp(&b.name));

    let mut years: Vec<u32> = catalog
        .courses()
        .iter()
        .map(|c| c.first_approval_year)
        .filter(|&y| y != 0)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));

    let mut terms: Vec<AvailabilityTerm> = Vec::new();
    let mut seen_terms: HashSet<&str> = HashSet::new();
    for course in catalog.courses() {
        for term in &course.availability {
            if seen_terms.insert(term.code.as_str()) {
                terms.push(term.clone());
            }
        }
    }
    terms.sort_by(|a, b| a.code.cmp(&b.code));

    FacetIndex {
        departments: depts,
        interests: interests.to_vec(),
        approval_years: years,
        terms,
    }
}
