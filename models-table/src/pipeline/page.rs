//! Pagination stage: page slicing and navigation metadata.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

/// Label shown in place of skipped page numbers.
pub const ELLIPSIS: &str = "...";

/// Number of pages needed for `len` rows, `ceil(len / page_size)`.
///
/// A page size of zero yields zero pages.
pub fn pages_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of the rows shown on `current_page` (1-based).
///
/// When there are fewer rows than fit on one page, every row is shown no
/// matter which page is current. Otherwise the range is
/// `page_size * (current_page - 1)` onwards, clipped to `len`, and empty past
/// the end or on page 0.
pub fn page_range(len: usize, page_size: usize, current_page: usize) -> Range<usize> {
    if len < page_size {
        return 0..len;
    }
    if current_page == 0 {
        return 0..0;
    }
    let start = page_size
        .saturating_mul(current_page.saturating_sub(1))
        .min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The rows shown on `current_page`.
pub fn paginate<T>(arranged: &[T], page_size: usize, current_page: usize) -> &[T] {
    &arranged[page_range(arranged.len(), page_size, current_page)]
}

/// One entry of a numeric pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageLabel {
    /// A clickable page number.
    Page(usize),
    /// A gap marker standing for skipped pages.
    Ellipsis,
}

impl PageLabel {
    /// Whether clicking the label navigates.
    pub fn is_link(&self) -> bool {
        matches!(self, PageLabel::Page(_))
    }

    /// Whether the label is the current page.
    pub fn is_active(&self, current_page: usize) -> bool {
        matches!(self, PageLabel::Page(n) if *n == current_page)
    }

    /// The page number, if this is a link.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageLabel::Page(n) => Some(*n),
            PageLabel::Ellipsis => None,
        }
    }
}

impl std::fmt::Display for PageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{}", n),
            PageLabel::Ellipsis => write!(f, "{}", ELLIPSIS),
        }
    }
}

/// A page label with its link and active flags resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNumber {
    pub label: PageLabel,
    pub is_link: bool,
    pub is_active: bool,
}

/// Labels for a numeric pagination control.
///
/// Always includes the first and last page plus the pages next to the
/// current one. Where that window does not touch an edge group, an ellipsis
/// sits at the floor-average of the two neighbouring boundaries.
///
/// ```
/// use models_table::pipeline::{PageLabel, visible_page_numbers};
///
/// let labels: Vec<PageLabel> = visible_page_numbers(10, 5).iter().map(|p| p.label).collect();
/// assert_eq!(labels, vec![
///     PageLabel::Page(1),
///     PageLabel::Ellipsis,
///     PageLabel::Page(4),
///     PageLabel::Page(5),
///     PageLabel::Page(6),
///     PageLabel::Ellipsis,
///     PageLabel::Page(10),
/// ]);
/// ```
pub fn visible_page_numbers(pages_count: usize, current_page: usize) -> Vec<PageNumber> {
    let pages = pages_count as i64;
    let current = current_page as i64;

    let first_group_end = pages.min(1);
    let last_group_start = pages.max(1);
    let window_start = (first_group_end + 1).max(current - 1);
    let window_end = (last_group_start - 1).min(current + 1);
    let left_gap = (first_group_end + window_start).div_euclid(2);
    let right_gap = (window_end + last_group_start).div_euclid(2);
    let window_is_valid = window_end >= window_start;

    // Positions keyed by page slot so overlapping groups collapse.
    let mut slots: BTreeMap<i64, PageLabel> = BTreeMap::new();
    let put_pages = |slots: &mut BTreeMap<i64, PageLabel>, from: i64, to: i64| {
        for n in from.max(1)..=to {
            slots.insert(n, PageLabel::Page(n as usize));
        }
    };

    put_pages(&mut slots, 1, first_group_end);
    if window_is_valid && window_start - first_group_end > 1 {
        slots.insert(left_gap, PageLabel::Ellipsis);
    }
    put_pages(&mut slots, window_start, window_end);
    if window_is_valid && last_group_start - window_end > 1 {
        slots.insert(right_gap, PageLabel::Ellipsis);
    }
    put_pages(&mut slots, last_group_start, pages);

    slots
        .into_values()
        .map(|label| PageNumber {
            label,
            is_link: label.is_link(),
            is_active: label.is_active(current_page),
        })
        .collect()
}

/// First and last 1-based row positions shown in the footer summary.
///
/// `first` is 0 for an empty table and on page 0. `last` is the total on the
/// last page and `current_page * page_size` otherwise.
pub fn summary_bounds(len: usize, page_size: usize, current_page: usize) -> (usize, usize) {
    let first = if len == 0 || current_page == 0 {
        0
    } else {
        page_size
            .saturating_mul(current_page.saturating_sub(1))
            .saturating_add(1)
    };
    let is_last_page = !forward_enabled(len, page_size, current_page);
    let last = if is_last_page {
        len
    } else {
        current_page.saturating_mul(page_size)
    };
    (first, last)
}

/// "First" and "Prev" are enabled.
pub fn back_enabled(current_page: usize) -> bool {
    current_page > 1
}

/// "Next" and "Last" are enabled.
pub fn forward_enabled(len: usize, page_size: usize, current_page: usize) -> bool {
    current_page < pages_count(len, page_size)
}
