//! OCS-style result envelope returned by the provisioning controller.
//!
//! A result carries a status code in its `meta` block and an optional data
//! payload. Transports map the status code onto their own status via
//! [`OcsResult::http_status`].

use serde::{Deserialize, Serialize};

use crate::apps::QueryError;

pub mod status {
    pub const OK: u16 = 100;
    pub const INVALID_FILTER: u16 = 101;
    pub const UNAUTHORISED: u16 = 997;
    pub const NOT_FOUND: u16 = 998;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OcsStatus {
    Ok,
    Failure,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OcsMeta {
    pub status: OcsStatus,
    pub statuscode: u16,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OcsResult<T> {
    pub meta: OcsMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> OcsResult<T> {
    pub fn success(data: T) -> Self {
        OcsResult {
            meta: OcsMeta {
                status: OcsStatus::Ok,
                statuscode: status::OK,
                message: String::new(),
            },
            data: Some(data),
        }
    }

    pub fn failure(error: &QueryError) -> Self {
        Self::failure_with_message(error.code(), error.to_string())
    }

    pub fn failure_with_message(statuscode: u16, message: impl Into<String>) -> Self {
        OcsResult {
            meta: OcsMeta {
                status: OcsStatus::Failure,
                statuscode,
                message: message.into(),
            },
            data: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.meta.status == OcsStatus::Ok
    }

    pub fn status_code(&self) -> u16 {
        self.meta.statuscode
    }

    pub fn message(&self) -> &str {
        &self.meta.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OcsResult<U> {
        OcsResult {
            meta: self.meta,
            data: self.data.map(f),
        }
    }

    /// HTTP-equivalent status for this result.
    pub fn http_status(&self) -> u16 {
        match self.meta.statuscode {
            status::OK => 200,
            status::UNAUTHORISED => 401,
            status::NOT_FOUND => 404,
            _ => 400,
        }
    }
}

impl<T> From<Result<T, QueryError>> for OcsResult<T> {
    fn from(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(data) => OcsResult::success(data),
            Err(error) => OcsResult::failure(&error),
        }
    }
}
