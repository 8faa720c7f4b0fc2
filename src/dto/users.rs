//! Data handed to the user table template.

use serde::Serialize;

use crate::columns::ColumnControl;
use crate::domain::user::User;
use crate::pagination::{PageControl, PaginationState};

/// Everything required to render one page of the user table.
#[derive(Debug, Clone, Serialize)]
pub struct UsersPageData {
    /// Users on the current page, already filtered and ordered.
    pub users: Vec<User>,
    /// Search term echoed back into the search box.
    pub search_term: String,
    /// Table headings, `#` first.
    pub column_controls: Vec<ColumnControl>,
    /// Previous / page numbers / Next. Empty when everything fits on one page.
    pub page_controls: Vec<PageControl>,
    pub pagination: PaginationState,
}
