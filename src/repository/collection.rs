//! Immutable, composable collection of users.
//!
//! Every operation returns a new [`UserCollection`]; the receiver is left
//! untouched so a snapshot can be reused across requests.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::user::{User, UserField};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserCollection {
    items: Vec<User>,
}

impl UserCollection {
    pub fn new(items: Vec<User>) -> Self {
        Self { items }
    }

    /// Keeps users where any of `fields` contains `term`, ignoring case.
    pub fn filter(&self, fields: &[UserField], term: &str) -> Self {
        let needle = term.to_lowercase();
        let items = self
            .items
            .iter()
            .filter(|user| matches_any_field(user, fields, &needle))
            .cloned()
            .collect();
        Self { items }
    }

    /// Sorts by `(field, id)` ascending, then reverses the whole sequence when
    /// `descending` is set. Ties on `field` therefore come out by descending id.
    pub fn order(&self, field: UserField, descending: bool) -> Self {
        let mut items = self.items.clone();
        items.sort_by(|a, b| compare_by_field(a, b, field));
        if descending {
            items.reverse();
        }
        Self { items }
    }

    pub fn offset(&self, index: usize) -> Self {
        let items = self.items.iter().skip(index).cloned().collect();
        Self { items }
    }

    pub fn limit(&self, count: usize) -> Self {
        let items = self.items.iter().take(count).cloned().collect();
        Self { items }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[User] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<User> {
        self.items
    }
}

impl From<Vec<User>> for UserCollection {
    fn from(items: Vec<User>) -> Self {
        Self::new(items)
    }
}

impl IntoIterator for UserCollection {
    type Item = User;
    type IntoIter = std::vec::IntoIter<User>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a UserCollection {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// `needle` must already be lower-cased.
fn matches_any_field(user: &User, fields: &[UserField], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| user.field(*field).to_lowercase().contains(needle))
}

fn compare_by_field(a: &User, b: &User, field: UserField) -> Ordering {
    a.field(field)
        .cmp(b.field(field))
        .then_with(|| a.id.cmp(&b.id))
}
