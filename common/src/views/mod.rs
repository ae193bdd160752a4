//! Output views returned by the cluster-registration service.

use serde::{Deserialize, Serialize};

mod cluster;
pub use cluster::*;

/// An error response for an API endpoint. This is used to return errors to
/// the client in a consistent format.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    /// An optional error code that can be used to identify the type of error
    /// that occurred.
    pub code: Option<String>,

    /// A human-readable message describing the error that occurred.
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
