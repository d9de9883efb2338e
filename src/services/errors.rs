use thiserror::Error;

use crate::forms::products::ProductFormError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    /// The request body failed validation.
    #[error(transparent)]
    Form(#[from] ProductFormError),
    /// The product identifier is not an integer.
    #[error("invalid product id: {0:?}")]
    InvalidId(String),
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
