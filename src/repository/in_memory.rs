//! Read-only in-memory user source.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::types::UserId;
use crate::domain::user::User;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{UserCollection, UserReader};

/// Users served when no fixture file is configured.
const DEFAULT_USERS: &[(i32, &str, &str, &str)] = &[
    (1, "Mark", "Otto", "@mdo"),
    (2, "Jacob", "Thornton", "@fat"),
    (3, "Larry", "the Bird", "@twitter"),
    (4, "Cecilia", "Rush", "@cecilia"),
    (5, "Emily", "Cruise", "@ecruise"),
    (6, "Tom", "Foolery", "@tom"),
    (7, "Larry", "the Bird", "@twitter"),
    (8, "Larry", "the Bird", "@twitter"),
    (9, "Larry", "the Bird", "@twitter"),
    (10, "Larry", "the Bird", "@twitter"),
    (11, "Larry", "the Bird", "@twitter"),
    (12, "Larry", "the Bird", "@twitter"),
    (13, "Larry", "the Bird", "@twitter"),
    (14, "Larry", "the Bird", "@twitter"),
];

#[derive(Clone, Debug)]
pub struct InMemoryRepository {
    users: UserCollection,
}

impl InMemoryRepository {
    /// Wraps `users`, rejecting duplicate primary keys.
    pub fn new(users: Vec<User>) -> RepositoryResult<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "Duplicate user id: {}",
                    user.id
                )));
            }
        }

        Ok(Self {
            users: UserCollection::new(users),
        })
    }

    /// The built-in fourteen user fixture.
    pub fn fixture() -> RepositoryResult<Self> {
        let users = DEFAULT_USERS
            .iter()
            .map(|&(id, first, last, handle)| -> RepositoryResult<User> {
                Ok(User::new(UserId::new(id)?, first, last, handle))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Self::new(users)
    }

    /// Parses a JSON array of users.
    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Self::new(users)
    }

    /// Loads users from a JSON fixture file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| {
            log::error!("Failed to read users from {}: {err}", path.display());
            RepositoryError::from(err)
        })?;
        let repo = Self::from_json_str(&json)?;
        log::info!("Loaded {} users from {}", repo.users.count(), path.display());
        Ok(repo)
    }
}

impl UserReader for InMemoryRepository {
    fn list_users(&self) -> RepositoryResult<UserCollection> {
        Ok(self.users.clone())
    }
}
