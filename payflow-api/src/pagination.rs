//! Pagination utilities for the employee roster

use payflow_common::api::PaginationMeta;

/// Default page size when the client does not specify one
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Calculate pagination metadata from a collection size and request params
///
/// Page numbers below 1 clamp to 1. A page past the end is NOT clamped:
/// its slice is simply empty, which is how the demo frontend detects the
/// end of the list.
///
/// # Examples
/// ```
/// use payflow_api::pagination::paginate;
///
/// // 50 employees, 10 per page = 5 pages
/// let p = paginate(50, 2, 10);
/// assert_eq!(p.page, 2);
/// assert_eq!(p.total_pages, 5);
/// ```
pub fn paginate(total: u64, requested_page: u64, per_page: u64) -> PaginationMeta {
    let per_page = per_page.max(1);
    let page = requested_page.max(1);
    let total_pages = total.div_ceil(per_page);

    PaginationMeta {
        page,
        per_page,
        total,
        total_pages,
    }
}

/// Slice one page out of a collection
///
/// Bounds are clamped to the collection, so an out-of-range page yields
/// an empty slice rather than panicking. Arithmetic saturates: page and
/// per_page come straight from the query string, so u64::MAX is a value
/// a client can actually send.
pub fn page_slice<'a, T>(items: &'a [T], meta: &PaginationMeta) -> &'a [T] {
    let len = items.len() as u64;
    let start = meta.page.saturating_sub(1).saturating_mul(meta.per_page).min(len);
    let end = start.saturating_add(meta.per_page).min(len);
    &items[start as usize..end as usize]
}
