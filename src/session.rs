use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogSource};
use crate::error::AppError;
use crate::facets::{FacetIndex, build_facet_index};
use crate::filter::{FilterState, apply_filters};
use crate::models::Course;
use crate::pagination::{PageView, paginate};
use crate::urlstate;

struct Loaded {
    catalog: Catalog,
    facets: FacetIndex,
}

/// Owns the one (FilterState, page) pair for a browsing session, the loaded
/// catalog, and the replay slot for requests that arrive before the catalog
/// does.
///
/// All view computation goes through pure functions; this type only holds
/// the current inputs and hands back structured results, never markup.
pub struct CatalogSession {
    source: Arc<dyn CatalogSource>,
    loaded: Option<Loaded>,
    state: FilterState,
    page: u32,
    page_size: usize,
    /// Last-writer-wins request parked until the catalog resolves.
    pending: Option<(FilterState, u32)>,
}

impl CatalogSession {
    pub fn new(source: Arc<dyn CatalogSource>, page_size: usize) -> Self {
        Self {
            source,
            loaded: None,
            state: FilterState::default(),
            page: 1,
            page_size,
            pending: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Fetches the catalog and auxiliary feeds, builds the facet index, and
    /// replays the most recent parked request, if any, exactly once. A
    /// failure is terminal for this attempt: nothing downstream is touched
    /// and the caller decides whether to retry.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let data = self.source.load().await?;
        let facets = build_facet_index(&data.catalog, &data.departments, &data.interests);
        self.loaded = Some(Loaded {
            catalog: data.catalog,
            facets,
        });

        if let Some((state, page)) = self.pending.take() {
            info!("Replaying filter request parked during catalog load");
            self.state = state;
            self.page = page;
        }
        Ok(())
    }

    /// Applies a new complete filter snapshot. The working page resets to 1,
    /// matching the rule that any filter change starts from the first page.
    /// Before the catalog resolves the request is parked, superseding any
    /// earlier parked request.
    pub fn request_filters(&mut self, state: FilterState) {
        if self.loaded.is_none() {
            debug!("Catalog not loaded yet, parking filter request");
            self.pending = Some((state, 1));
            return;
        }
        self.state = state;
        self.page = 1;
    }

    /// Moves to another page without touching the filter state. The value is
    /// clamped against the current result set when the view is computed.
    pub fn set_page(&mut self, page: u32) {
        if self.loaded.is_none() {
            let state = self
                .pending
                .take()
                .map(|(state, _)| state)
                .unwrap_or_default();
            self.pending = Some((state, page));
            return;
        }
        self.page = page;
    }

    /// Restores filter state and page from a URL fragment, e.g. on initial
    /// navigation or a history back/forward event.
    pub fn restore_fragment(&mut self, fragment: &str) {
        let (state, page) = urlstate::decode(fragment);
        if self.loaded.is_none() {
            debug!("Catalog not loaded yet, parking restored fragment state");
            self.pending = Some((state, page));
            return;
        }
        self.state = state;
        self.page = page;
    }

    /// The fragment encoding of the current state, for the host to push into
    /// the address bar.
    pub fn fragment(&self) -> String {
        urlstate::encode(&self.state, self.page)
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    /// Computes the current page of filtered courses. `None` until the
    /// catalog has loaded.
    pub fn current_view(&self) -> Option<PageView<Course>> {
        let loaded = self.loaded.as_ref()?;
        let results = apply_filters(&loaded.catalog, &self.state);
        let owned: Vec<Course> = results.into_iter().cloned().collect();
        Some(paginate(&owned, self.page_size, self.page))
    }

    pub fn facets(&self) -> Option<&FacetIndex> {
        self.loaded.as_ref().map(|l| &l.facets)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.loaded.as_ref().map(|l| &l.catalog)
    }
}
