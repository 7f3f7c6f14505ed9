//! JSON API payloads.
//!
//! Mirrors the wire shapes of the CertCentral services API. Not intended to be
//! constructed directly except for the submission request types.

use std::fmt;

use serde::{Deserialize, Serialize};

mod order;
mod organization;
mod request;
mod submission;

pub use self::{
    order::{Certificate, Order, Orders, Page, Product},
    organization::{Container, Organization, OrganizationRef, Organizations},
    request::{CertificateRequest, RequestedCertificate, ServerPlatform},
    submission::{RequestStatus, SubmissionRequest, SubmissionResponse},
};

/// One error reported by the API.
///
/// # Example JSON
///
/// ```json
/// {
///   "code": "invalid_common_name",
///   "message": "Common name is not a valid domain."
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Error envelope returned with non-success statuses.
///
/// The API may report several errors per failed call; client policy keeps only
/// the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    pub errors: Vec<ApiError>,
}

impl ApiErrors {
    /// Takes the first reported error, if any.
    pub(crate) fn into_first(self) -> Option<ApiError> {
        self.errors.into_iter().next()
    }
}
