use std::num::IntErrorKind;

use crate::domain::listing::{ListingQuery, PageIntent, SearchIntent, SortIntent};
use crate::domain::user::UserField;
use crate::links::RequestUrl;

pub const SEARCH_PARAM: &str = "search";
pub const ORDER_PARAM: &str = "order";
pub const PAGE_PARAM: &str = "page";

/// Raw listing parameters as they appear in the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersQueryForm {
    pub search: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
}

impl UsersQueryForm {
    pub fn from_url(url: &RequestUrl) -> Self {
        Self {
            search: url.get(SEARCH_PARAM).map(str::to_string),
            order: url.get(ORDER_PARAM).map(str::to_string),
            page: url.get(PAGE_PARAM).map(str::to_string),
        }
    }

    /// Interprets the raw values. Never fails: bad input falls back to defaults.
    pub fn to_query(&self) -> ListingQuery {
        ListingQuery {
            search: SearchIntent::new(self.search.clone().unwrap_or_default()),
            sort: self
                .order
                .as_deref()
                .map(parse_ordering)
                .unwrap_or_default(),
            page: PageIntent {
                requested: self.page.as_deref().map_or(Some(1), parse_page_number),
            },
        }
    }
}

impl From<&RequestUrl> for ListingQuery {
    fn from(url: &RequestUrl) -> Self {
        UsersQueryForm::from_url(url).to_query()
    }
}

/// `-last` sorts by last name descending; unknown columns mean no sort.
pub fn parse_ordering(raw: &str) -> SortIntent {
    let column = raw.trim_start_matches('-');
    let descending = column.len() != raw.len();

    match column.parse::<UserField>() {
        Ok(column) => SortIntent {
            column: Some(column),
            descending,
        },
        Err(_) => SortIntent::none(),
    }
}

/// `None` marks a value that is not an integer at all.
pub fn parse_page_number(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(page) => Some(page),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
