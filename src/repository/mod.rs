use crate::repository::errors::RepositoryResult;

pub mod collection;
pub mod errors;
pub mod in_memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use collection::UserCollection;
pub use in_memory::InMemoryRepository;

/// Source of the users shown in the listing.
pub trait UserReader {
    /// Returns a snapshot of every user, ordered by insertion.
    fn list_users(&self) -> RepositoryResult<UserCollection>;
}
