//! The URL-fragment codec. The key names below are a compatibility
//! contract: previously bookmarked fragments must keep decoding after any
//! internal change.

use tracing::{debug, warn};

use crate::filter::FilterState;

const KEY_AREAS: &str = "areas";
const KEY_INTERESTS: &str = "interests";
const KEY_DEPARTMENTS: &str = "departments";
const KEY_KEYWORD: &str = "keyword";
const KEY_TERM: &str = "term";
const KEY_APPROVAL: &str = "approval";
const KEY_PAGE: &str = "page";

/// Serializes the state into a compact fragment. Default fields and page 1
/// are omitted, so the default view encodes to the empty string.
pub fn encode(state: &FilterState, page: u32) -> String {
    let state = state.clone().normalized();
    let mut pairs: Vec<String> = Vec::new();

    push_list(&mut pairs, KEY_AREAS, &state.areas);
    push_list(&mut pairs, KEY_INTERESTS, &state.interests);
    push_list(&mut pairs, KEY_DEPARTMENTS, &state.departments);
    if !state.keyword.is_empty() {
        pairs.push(format!("{}={}", KEY_KEYWORD, urlencoding::encode(&state.keyword)));
    }
    if let Some(term) = &state.term {
        pairs.push(format!("{}={}", KEY_TERM, urlencoding::encode(term)));
    }
    if let Some(year) = state.approval_year {
        pairs.push(format!("{}={}", KEY_APPROVAL, year));
    }
    if page > 1 {
        pairs.push(format!("{}={}", KEY_PAGE, page));
    }

    pairs.join("&")
}

/// Restores `(FilterState, page)` from a fragment. Total over arbitrary
/// input: malformed fields fall back to their defaults one by one, unknown
/// keys are ignored, and an empty or missing fragment yields the default
/// view on page 1.
pub fn decode(fragment: &str) -> (FilterState, u32) {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut state = FilterState::default();
    let mut page: u32 = 1;

    for pair in fragment.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            KEY_AREAS => state.areas = decode_list(value),
            KEY_INTERESTS => state.interests = decode_list(value),
            KEY_DEPARTMENTS => state.departments = decode_list(value),
            KEY_KEYWORD => state.keyword = decode_value(value).unwrap_or_default(),
            KEY_TERM => state.term = decode_value(value).filter(|v| !v.is_empty()),
            KEY_APPROVAL => {
                state.approval_year = match value.parse::<u32>() {
                    Ok(year) => Some(year),
                    Err(_) => {
                        warn!("Ignoring malformed approval selector: {:?}", value);
                        None
                    }
                }
            }
            KEY_PAGE => {
                page = match value.parse::<u32>() {
                    Ok(p) if p >= 1 => p,
                    _ => {
                        warn!("Ignoring malformed page number: {:?}", value);
                        1
                    }
                }
            }
            other => debug!("Ignoring unknown fragment key: {:?}", other),
        }
    }

    (state.normalized(), page)
}

fn push_list(pairs: &mut Vec<String>, key: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let joined = values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    pairs.push(format!("{}={}", key, joined));
}

fn decode_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|token| !token.is_empty())
        .filter_map(decode_value)
        .collect()
}

fn decode_value(value: &str) -> Option<String> {
    match urlencoding::decode(value) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(err) => {
            warn!("Ignoring undecodable fragment value {:?}: {}", value, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_encodes_to_empty_string() {
        assert_eq!(encode(&FilterState::default(), 1), "");
    }

    #[test]
    fn decodes_documented_fragment() {
        let (state, page) = decode("areas=AH,WC&keyword=lab&page=3");
        assert_eq!(state.areas, vec!["AH", "WC"]);
        assert_eq!(state.keyword, "lab");
        assert!(state.interests.is_empty());
        assert!(state.departments.is_empty());
        assert_eq!(state.term, None);
        assert_eq!(state.approval_year, None);
        assert_eq!(page, 3);
    }

    #[test]
    fn page_one_is_omitted_on_encode() {
        let state = FilterState {
            keyword: "lab".to_string(),
            ..FilterState::default()
        };
        assert_eq!(encode(&state, 1), "keyword=lab");
        assert_eq!(encode(&state, 3), "keyword=lab&page=3");
    }

    #[test]
    fn all_sentinel_normalizes_to_no_area_restriction() {
        let state = FilterState {
            areas: vec!["all".to_string()],
            ..FilterState::default()
        };
        assert_eq!(encode(&state, 1), "");

        let (decoded, _) = decode("areas=all");
        assert!(decoded.areas.is_empty());
    }

    #[test]
    fn keyword_round_trips_through_escaping() {
        let state = FilterState {
            keyword: "lab & field work".to_string(),
            ..FilterState::default()
        };
        let fragment = encode(&state, 1);
        let (decoded, page) = decode(&fragment);
        assert_eq!(decoded.keyword, "lab & field work");
        assert_eq!(page, 1);
    }

    #[test]
    fn malformed_fields_degrade_individually() {
        let (state, page) = decode("page=banana&approval=4100x&interests=health&bogus=1");
        assert_eq!(page, 1);
        assert_eq!(state.approval_year, None);
        // The well-formed field still decodes.
        assert_eq!(state.interests, vec!["health"]);
    }

    #[test]
    fn leading_hash_and_empty_lists_are_tolerated() {
        let (state, page) = decode("#departments=&areas=AH&page=2");
        assert!(state.departments.is_empty());
        assert_eq!(state.areas, vec!["AH"]);
        assert_eq!(page, 2);
    }

    #[test]
    fn decode_is_order_independent() {
        let (a, page_a) = decode("keyword=lab&areas=AH&page=2");
        let (b, page_b) = decode("page=2&areas=AH&keyword=lab");
        assert_eq!(a, b);
        assert_eq!(page_a, page_b);
    }
}
