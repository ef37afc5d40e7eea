//! Service layer orchestrating repositories for routes and binaries.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod bootstrap;
pub mod clients;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
