//! Typed intents produced from the raw listing query parameters.

use serde::Serialize;

use crate::domain::user::UserField;

/// Free-text search over a set of user fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchIntent {
    pub term: String,
    pub fields: Vec<UserField>,
}

impl SearchIntent {
    /// Searches `term` across every searchable field.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            fields: UserField::ALL.to_vec(),
        }
    }

    /// An empty term disables filtering.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

/// Requested ordering. `column` is `None` when no valid column was given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SortIntent {
    pub column: Option<UserField>,
    pub descending: bool,
}

impl SortIntent {
    pub fn ascending(column: UserField) -> Self {
        Self {
            column: Some(column),
            descending: false,
        }
    }

    pub fn descending(column: UserField) -> Self {
        Self {
            column: Some(column),
            descending: true,
        }
    }

    /// Direction is only meaningful alongside a column.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Requested page number; `None` when the parameter could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageIntent {
    pub requested: Option<i64>,
}

impl Default for PageIntent {
    fn default() -> Self {
        Self { requested: Some(1) }
    }
}

/// Everything the listing engine needs from the request query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: SearchIntent,
    pub sort: SortIntent,
    pub page: PageIntent,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: SearchIntent::new(""),
            sort: SortIntent::none(),
            page: PageIntent::default(),
        }
    }
}
