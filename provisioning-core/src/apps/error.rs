use thiserror::Error;

use crate::ocs::status;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("App not found: {0}")]
    NotFound(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Administrative privileges required")]
    Unauthorized,
}

impl QueryError {
    /// Stable OCS status code used by callers to map the failure onto a transport.
    pub fn code(&self) -> u16 {
        match self {
            QueryError::NotFound(_) => status::NOT_FOUND,
            QueryError::InvalidFilter(_) => status::INVALID_FILTER,
            QueryError::Unauthorized => status::UNAUTHORISED,
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
