use async_trait::async_trait;

use crate::error::HttpError;

/// What a step needs from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn body_len(&self) -> u64 {
        u64::try_from(self.body.len()).unwrap_or(u64::MAX)
    }
}

/// Client seam for the pet clinic endpoints. `path` is relative to the
/// configured host.
///
/// An `Err` means no response was obtained (connect failure, timeout, a body
/// that could not be read). Any HTTP status, including 5xx, is a reply.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET, following redirects.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot complete.
    async fn get(&self, path: &str) -> Result<HttpReply, HttpError>;

    /// Submits a urlencoded form without following redirects, so a 302 and
    /// its `Location` header reach the caller.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot complete.
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, &str)],
    ) -> Result<HttpReply, HttpError>;
}
