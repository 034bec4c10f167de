//! Wire types for the MSK REST API
//!
//! Field names follow the service's camelCase JSON conventions.

use serde::{Deserialize, Serialize};

/// Request for one page of the `ListScramSecrets` operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScramSecretsRequest {
    /// ARN of the cluster whose secrets are listed
    pub cluster_arn: String,
    /// Page size; the service default applies when unset
    pub max_results: Option<u32>,
    /// Continuation token from the previous page
    pub next_token: Option<String>,
}

impl ListScramSecretsRequest {
    /// Create a request for the first page
    pub fn new(cluster_arn: impl Into<String>) -> Self {
        Self {
            cluster_arn: cluster_arn.into(),
            max_results: None,
            next_token: None,
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the continuation token
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// One page of the `ListScramSecrets` operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListScramSecretsResponse {
    /// Secret ARNs on this page, in service order
    #[serde(default)]
    pub secret_arn_list: Vec<String>,
    /// Token for the next page; absent or empty on the last page
    #[serde(default)]
    pub next_token: Option<String>,
}

impl ListScramSecretsResponse {
    /// Whether this is the last page
    pub fn is_last_page(&self) -> bool {
        match &self.next_token {
            Some(token) => token.is_empty(),
            None => true,
        }
    }
}
