//! The contract every list request implements.

use serde::de::DeserializeOwned;

use super::error::Error;
use super::params::{QueryParams, Resource};

/// A validated request against one list endpoint.
///
/// Implementors render their filters into query parameters; the client adds
/// credentials, performs the request, follows pages, and decodes the result.
pub trait ListQuery {
    /// Item type of the typed response.
    type Item: DeserializeOwned;

    /// Endpoint the query targets.
    fn resource(&self) -> Resource;

    /// Validate the query and render its parameters, including `part`.
    fn to_params(&self) -> Result<QueryParams, Error>;

    /// Total number of items to gather across pages, if paging is wanted.
    fn total_count(&self) -> Option<u32> {
        None
    }

    /// Whether the request only makes sense with an OAuth access token.
    fn requires_auth(&self) -> bool {
        false
    }
}

/// Builder methods shared by paginated queries.
///
/// Expands inside an `impl` block of a struct with a `paging: Paging` field.
macro_rules! paging_methods {
    () => {
        /// Items per page (`maxResults`).
        pub fn max_results(mut self, n: u32) -> Self {
            self.paging.max_results = Some(n);
            self
        }

        /// Start from this page instead of the first.
        pub fn page_token(mut self, token: &str) -> Self {
            self.paging.page_token = Some(token.to_string());
            self
        }

        /// Follow `nextPageToken` until this many items are gathered.
        pub fn count(mut self, n: u32) -> Self {
            self.paging.count = Some(n);
            self
        }
    };
}

pub(crate) use paging_methods;
