use serde::Serialize;

use crate::forms::users::PAGE_PARAM;
use crate::links::RequestUrl;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Pages kept around the current one in the main block.
const MAIN_BLOCK_RADIUS: usize = 2;

pub const GAP_LABEL: &str = "…";
pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";

/// Totals and the clamped current page for one listing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl PaginationState {
    /// Clamps `requested` into `1..=total_pages`; an unset page is page 1.
    pub fn new(total_items: usize, page_size: usize, requested: Option<i64>) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);
        let last = i64::try_from(total_pages).unwrap_or(i64::MAX);
        let current_page = requested.map_or(1, |page| page.clamp(1, last) as usize);

        Self {
            page_size,
            total_items,
            total_pages,
            current_page,
        }
    }

    /// Number of items skipped before the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One entry of the page navigation strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub label: String,
    pub url: Option<String>,
    pub is_active: bool,
    pub is_disabled: bool,
}

impl PageControl {
    fn page(number: usize, url: String, is_active: bool) -> Self {
        Self {
            label: number.to_string(),
            url: Some(url),
            is_active,
            is_disabled: false,
        }
    }

    fn gap() -> Self {
        Self {
            label: GAP_LABEL.to_string(),
            url: None,
            is_active: false,
            is_disabled: true,
        }
    }

    fn step(label: &str, url: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            is_disabled: url.is_none(),
            url,
            is_active: false,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.label == GAP_LABEL
    }
}

/// Inclusive range `start..=end`, bounded below by 1 and above by `cutoff`.
pub fn page_range(start: usize, end: usize, cutoff: usize) -> Vec<usize> {
    (start.max(1)..=end.min(cutoff)).collect()
}

/// Page numbers to show, in order. `None` is a gap.
fn window(current_page: usize, total_pages: usize) -> Vec<Option<usize>> {
    let span = MAIN_BLOCK_RADIUS * 2;

    let main_block = if current_page <= MAIN_BLOCK_RADIUS {
        page_range(1, span + 1, total_pages)
    } else if current_page + 1 >= total_pages {
        page_range(total_pages.saturating_sub(span), total_pages, total_pages)
    } else {
        page_range(
            current_page - MAIN_BLOCK_RADIUS,
            current_page + MAIN_BLOCK_RADIUS,
            total_pages,
        )
    };
    let (Some(&main_first), Some(&main_last)) = (main_block.first(), main_block.last()) else {
        return Vec::new();
    };

    let mut start_block: Vec<Option<usize>> =
        page_range(1, 2, total_pages).into_iter().map(Some).collect();
    if main_first == 4 {
        // | 1 2 3 4 5 [6] 7 8
        start_block.push(Some(3));
    } else if main_first > 4 {
        // | 1 2 … 5 6 [7] 8 9
        start_block.push(None);
    }

    let mut end_block: Vec<Option<usize>> = Vec::new();
    if total_pages > 3 && main_last == total_pages - 3 {
        // 92 93 [94] 95 96 97 98 99 |
        end_block.push(Some(total_pages - 2));
    } else if total_pages > 3 && main_last < total_pages - 3 {
        // 91 92 [93] 94 95 … 98 99 |
        end_block.push(None);
    }
    end_block.extend(
        page_range(total_pages.saturating_sub(1), total_pages, total_pages)
            .into_iter()
            .map(Some),
    );

    let mut seen = Vec::new();
    start_block
        .into_iter()
        .chain(main_block.into_iter().map(Some))
        .chain(end_block)
        .filter(|entry| match entry {
            None => true,
            Some(number) if seen.contains(number) => false,
            Some(number) => {
                seen.push(*number);
                true
            }
        })
        .collect()
}

fn page_url(url: &RequestUrl, number: usize) -> String {
    if number == 1 {
        url.remove_param(PAGE_PARAM).to_string()
    } else {
        url.include_param(PAGE_PARAM, number).to_string()
    }
}

/// Builds the Previous / numbered / Next strip. Empty for a single page.
pub fn page_controls(url: &RequestUrl, state: &PaginationState) -> Vec<PageControl> {
    let PaginationState {
        current_page,
        total_pages,
        ..
    } = *state;

    if total_pages <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::new();

    let previous_url = state
        .has_previous()
        .then(|| page_url(url, current_page - 1));
    controls.push(PageControl::step(PREVIOUS_LABEL, previous_url));

    controls.extend(window(current_page, total_pages).into_iter().map(|entry| match entry {
        Some(number) => PageControl::page(number, page_url(url, number), number == current_page),
        None => PageControl::gap(),
    }));

    let next_url = state
        .has_next()
        .then(|| url.include_param(PAGE_PARAM, current_page + 1).to_string());
    controls.push(PageControl::step(NEXT_LABEL, next_url));

    controls
}
