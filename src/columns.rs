use serde::Serialize;

use crate::domain::listing::SortIntent;
use crate::domain::user::UserField;
use crate::forms::users::ORDER_PARAM;
use crate::links::RequestUrl;

/// Label of the leading row-number column.
pub const INDEX_COLUMN_LABEL: &str = "#";

/// Table heading with the link that cycles its sort state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnControl {
    pub label: String,
    pub url: Option<String>,
    pub is_sorted: bool,
    pub is_descending: bool,
}

/// Headings in display order, starting with the unsortable `#` column.
///
/// Clicking a column cycles unsorted → ascending → descending → unsorted.
pub fn column_controls(url: &RequestUrl, sort: &SortIntent) -> Vec<ColumnControl> {
    let mut controls = vec![ColumnControl {
        label: INDEX_COLUMN_LABEL.to_string(),
        url: None,
        is_sorted: false,
        is_descending: false,
    }];

    controls.extend(UserField::ALL.into_iter().map(|column| {
        if sort.column == Some(column) {
            let target = if sort.descending {
                url.remove_param(ORDER_PARAM)
            } else {
                url.include_param(ORDER_PARAM, format!("-{column}"))
            };
            ColumnControl {
                label: column.label().to_string(),
                url: Some(target.to_string()),
                is_sorted: true,
                is_descending: sort.descending,
            }
        } else {
            ColumnControl {
                label: column.label().to_string(),
                url: Some(url.include_param(ORDER_PARAM, column).to_string()),
                is_sorted: false,
                is_descending: false,
            }
        }
    }));

    controls
}
