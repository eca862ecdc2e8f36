//! Fixed-size page slicing over an in-memory result set.

/// One page cut from a larger result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page; the last page holds the remainder without padding.
    pub items: Vec<T>,
    /// 1-based page number actually served (after clamping).
    pub page: u32,
    /// Always at least 1, even for an empty set.
    pub total_pages: u32,
    pub total_items: usize,
}

/// Returns `ceil(count / page_size)`, floored at 1.
pub fn total_pages(count: usize, page_size: usize) -> u32 {
    let page_size = page_size.max(1);
    let pages = count.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Returns whether `page` is a navigable target.
pub fn is_valid_page(page: u32, total_pages: u32) -> bool {
    (1..=total_pages).contains(&page)
}

/// Clamps `page` into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Cuts page `page` out of `items`, clamping out-of-range pages.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = clamp_page(page, total_pages);
    let start = (page as usize - 1) * page_size;
    let items = items.into_iter().skip(start).take(page_size).collect();
    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}
