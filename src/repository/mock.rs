//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::repository::errors::RepositoryResult;
use crate::repository::{UserCollection, UserReader};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn list_users(&self) -> RepositoryResult<UserCollection>;
    }
}
