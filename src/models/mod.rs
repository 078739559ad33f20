pub mod area;
pub mod course;

pub use area::{AreaMeta, AREA_ALL, GENED_AREAS, academic_year_label, expand_area_code};
pub use course::{AvailabilityTerm, Course, Department, InterestCategory};
