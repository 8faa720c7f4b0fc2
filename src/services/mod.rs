use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
