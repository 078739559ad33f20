use serde::Serialize;

/// One window of a result list plus the metadata the pager controls need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    /// 1-based page the window was actually computed for, after clamping.
    pub page: u32,
    pub total_pages: u32,
    pub total_items: usize,
}

/// Windows `results` into the requested page. Out-of-range requests are
/// clamped, never errored; an empty result list is a valid one-page view
/// with no items.
pub fn paginate<T: Clone>(results: &[T], page_size: usize, requested_page: u32) -> PageView<T> {
    let page_size = page_size.max(1);
    let total_items = results.len();
    let total_pages = (total_items.div_ceil(page_size)).max(1) as u32;
    let page = requested_page.clamp(1, total_pages);

    let start = (page as usize - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = if start < total_items {
        results[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageView {
        items,
        page,
        total_pages,
        total_items,
    }
}
