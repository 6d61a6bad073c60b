//! Service-layer operations and their error type.

use thiserror::Error;

use crate::domain::filter::FilterError;
use crate::repository::errors::RepositoryError;

pub mod crud;
pub mod oil_price;

/// Errors returned by service operations. Predicate construction fails
/// fast; repository failures pass through unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
