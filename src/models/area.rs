/// Static metadata for the GenEd areas shown in the filter interface.
/// `NM|NS` is a single interface option covering two underlying area codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaMeta {
    pub code: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const GENED_AREAS: &[AreaMeta] = &[
    AreaMeta { code: "AH", label: "Arts & Humanities", color: "#48183D" },
    AreaMeta { code: "EC", label: "English Composition", color: "#00385F" },
    AreaMeta { code: "MM", label: "Mathematical Modeling", color: "#006298" },
    AreaMeta { code: "NM|NS", label: "Natural & Math. Sciences", color: "#056E41" },
    AreaMeta { code: "SH", label: "Social & Hist. Studies", color: "#A36B00" },
    AreaMeta { code: "WC", label: "World Cultures", color: "#DF3603" },
    AreaMeta { code: "WL", label: "World Languages", color: "#DC231E" },
];

/// Sentinel selection meaning "no area restriction".
pub const AREA_ALL: &str = "all";

/// Splits a combined area code into its underlying codes. Plain codes come
/// back as a single element.
pub fn expand_area_code(code: &str) -> impl Iterator<Item = &str> {
    code.split('|').filter(|part| !part.is_empty())
}

const APPROVAL_BASE_CODE: u32 = 4100;
const APPROVAL_BASE_YEAR: u32 = 2010;

/// Maps an approval-year code to its academic-year label, e.g.
/// `4190` -> `"2019–2020 Academic Year"`. Codes advance by ten per year.
pub fn academic_year_label(code: u32) -> String {
    let start = (code as i64 - APPROVAL_BASE_CODE as i64) / 10 + APPROVAL_BASE_YEAR as i64;
    format!("{}\u{2013}{} Academic Year", start, start + 1)
}
