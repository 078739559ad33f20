//! Faceted browsing core for a static GenEd course catalog: filter engine,
//! pagination engine, URL-fragment state codec, and the session glue that
//! ties them to an async catalog load. Rendering and DOM concerns live in
//! the host; this crate only produces structured data.
//!
//! Contract for renderers: after re-rendering a new [`pagination::PageView`],
//! focus belongs back on the control that triggered the change.

pub mod catalog;
pub mod error;
pub mod facets;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod session;
pub mod urlstate;

pub use catalog::{Catalog, CatalogData, CatalogSource, FileCatalogSource, HttpCatalogSource, HttpSourceConfig};
pub use error::AppError;
pub use facets::{FacetIndex, build_facet_index};
pub use filter::{FilterState, apply_filters};
pub use pagination::{PageView, paginate};
pub use session::CatalogSession;
