use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{AREA_ALL, Course, expand_area_code};

/// A snapshot of the active facet selections. Replaced whole on every
/// change, never mutated in place, so no stale partial state can leak.
///
/// Every field defaults to "no restriction"; filters are opt-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected area codes. Empty, or containing the `all` sentinel, means
    /// no area restriction.
    pub areas: Vec<String>,
    pub interests: Vec<String>,
    pub departments: Vec<String>,
    /// Case-insensitive substring match; empty means no keyword filter.
    pub keyword: String,
    /// Open-seats term code, when that facet is enabled.
    pub term: Option<String>,
    /// Approval-year code selecting the historical window.
    pub approval_year: Option<u32>,
}

impl FilterState {
    /// True when the area selection imposes no restriction, i.e. it is empty
    /// or includes the `all` sentinel.
    pub fn area_unrestricted(&self) -> bool {
        self.areas.is_empty() || self.areas.iter().any(|a| a == AREA_ALL)
    }

    /// Canonical form used by the codec: an unrestricted area selection
    /// becomes the empty list. Other fields are already canonical.
    pub fn normalized(mut self) -> Self {
        if self.area_unrestricted() {
            self.areas.clear();
        }
        self
    }
}

/// Applies every active facet conjunctively, preserving catalog order.
/// Total over its inputs; an empty result is a valid outcome, not an error.
pub fn apply_filters<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Course> {
    // Expand combined codes like NM|NS once, not per course.
    let selected_areas: Option<HashSet<&str>> = if state.area_unrestricted() {
        None
    } else {
        Some(
            state
                .areas
                .iter()
                .flat_map(|code| expand_area_code(code))
                .collect(),
        )
    };
    let keyword = state.keyword.to_lowercase();

    catalog
        .courses()
        .iter()
        .filter(|course| matches_area(course, selected_areas.as_ref()))
        .filter(|course| matches_departments(course, &state.departments))
        .filter(|course| matches_interests(course, &state.interests))
        .filter(|course| matches_keyword(course, &keyword))
        .filter(|course| matches_term(course, state.term.as_deref()))
        .filter(|course| matches_approval(course, state.approval_year))
        .collect()
}

fn matches_area(course: &Course, selected: Option<&HashSet<&str>>) -> bool {
    let Some(selected) = selected else {
        return true;
    };
    course
        .areas
        .iter()
        .flat_map(|code| expand_area_code(code))
        .any(|code| selected.contains(code))
}

fn matches_departments(course: &Course, departments: &[String]) -> bool {
    departments.is_empty() || departments.iter().any(|d| *d == course.department.code)
}

fn matches_interests(course: &Course, interests: &[String]) -> bool {
    interests.is_empty() || course.interests.iter().any(|i| interests.contains(i))
}

fn matches_keyword(course: &Course, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }
    course.short_description.to_lowercase().contains(keyword)
        || course.long_description.to_lowercase().contains(keyword)
        || course.subject_number().to_lowercase().contains(keyword)
        || course.catalog_number.to_lowercase().contains(keyword)
}

fn matches_term(course: &Course, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    course.availability.iter().any(|t| t.code == term)
}

fn matches_approval(course: &Course, selector: Option<u32>) -> bool {
    let Some(term) = selector else {
        return true;
    };
    course.first_approval_year <= term
        && course.last_approval_year.is_none_or(|last| last >= term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityTerm, Department};

    fn course(id: &str) -> Course {
        Course {
            id: id.to_string(),
            subject: "BIOL".to_string(),
            number: "101".to_string(),
            short_description: String::new(),
            long_description: String::new(),
            catalog_number: String::new(),
            areas: vec![],
            department: Department {
                code: "BI".to_string(),
                name: "Biology".to_string(),
            },
            interests: vec![],
            availability: vec![],
            first_approval_year: 4100,
            last_approval_year: None,
        }
    }

    fn ids(results: &[&Course]) -> Vec<String> {
        results.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn default_state_passes_everything_in_order() {
        let catalog = Catalog::new(vec![course("a"), course("b"), course("c")]);
        let results = apply_filters(&catalog, &FilterState::default());
        assert_eq!(ids(&results), vec!["a", "b", "c"]);
    }

    #[test]
    fn all_sentinel_is_equivalent_to_empty_areas() {
        let mut tagged = course("a");
        tagged.areas = vec!["AH".to_string()];
        let catalog = Catalog::new(vec![tagged, course("b")]);

        let explicit_all = FilterState {
            areas: vec![AREA_ALL.to_string()],
            ..FilterState::default()
        };
        let empty = FilterState::default();
        assert_eq!(
            ids(&apply_filters(&catalog, &explicit_all)),
            ids(&apply_filters(&catalog, &empty))
        );
    }

    #[test]
    fn combined_area_code_matches_either_underlying_code() {
        let mut nm = course("nm");
        nm.areas = vec!["NM".to_string()];
        let mut ns = course("ns");
        ns.areas = vec!["NS".to_string()];
        let mut combined = course("combined");
        combined.areas = vec!["NM|NS".to_string()];
        let mut other = course("other");
        other.areas = vec!["AH".to_string()];
        let catalog = Catalog::new(vec![nm, ns, combined, other]);

        // Selecting the interface option covers both underlying codes.
        let state = FilterState {
            areas: vec!["NM|NS".to_string()],
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog, &state)), vec!["nm", "ns", "combined"]);

        // Selecting one underlying code still reaches combined-tagged courses.
        let state = FilterState {
            areas: vec!["NS".to_string()],
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog, &state)), vec!["ns", "combined"]);
    }

    #[test]
    fn keyword_is_case_insensitive_substring() {
        let mut biology = course("biology");
        biology.short_description = "Intro to Biology".to_string();
        let catalog = Catalog::new(vec![biology, course("other")]);

        for keyword in ["bio", "BIO"] {
            let state = FilterState {
                keyword: keyword.to_string(),
                ..FilterState::default()
            };
            assert_eq!(ids(&apply_filters(&catalog, &state)), vec!["biology"]);
        }
    }

    #[test]
    fn keyword_matches_subject_number() {
        let catalog = Catalog::new(vec![course("a")]);
        let state = FilterState {
            keyword: "biol 101".to_string(),
            ..FilterState::default()
        };
        assert_eq!(apply_filters(&catalog, &state).len(), 1);
    }

    #[test]
    fn interests_and_departments_intersect() {
        let mut a = course("a");
        a.interests = vec!["health".to_string()];
        let mut b = course("b");
        b.interests = vec!["arts".to_string()];
        b.department.code = "AR".to_string();
        let catalog = Catalog::new(vec![a, b]);

        let state = FilterState {
            interests: vec!["health".to_string(), "writing".to_string()],
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog, &state)), vec!["a"]);

        let state = FilterState {
            departments: vec!["AR".to_string()],
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog, &state)), vec!["b"]);
    }

    #[test]
    fn open_seats_term_requires_listed_availability() {
        let mut open = course("open");
        open.availability = vec![AvailabilityTerm {
            code: "4252".to_string(),
            label: "Spring 2025".to_string(),
        }];
        let catalog = Catalog::new(vec![open, course("closed")]);

        let state = FilterState {
            term: Some("4252".to_string()),
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog, &state)), vec!["open"]);
    }

    #[test]
    fn approval_window_checks_first_and_last_codes() {
        let current = course("current"); // first 4100, no last
        let mut superseded = course("superseded");
        superseded.last_approval_year = Some(4150);
        let catalog = Catalog::new(vec![current, superseded]);

        let at = |year: u32| FilterState {
            approval_year: Some(year),
            ..FilterState::default()
        };

        assert_eq!(ids(&apply_filters(&catalog, &at(4100))), vec!["current", "superseded"]);
        assert_eq!(ids(&apply_filters(&catalog, &at(4190))), vec!["current"]);
        assert!(apply_filters(&catalog, &at(4090)).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut a = course("a");
        a.short_description = "Writing lab".to_string();
        let catalog = Catalog::new(vec![a, course("b")]);
        let state = FilterState {
            keyword: "lab".to_string(),
            ..FilterState::default()
        };

        let first = ids(&apply_filters(&catalog, &state));
        let second = ids(&apply_filters(&catalog, &state));
        assert_eq!(first, second);
    }
}
