//! MSK REST API client

use super::types::{ListScramSecretsRequest, ListScramSecretsResponse};
use crate::config::ToolkitConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use tracing::debug;
use url::Url;

/// Client for the managed-streaming (Kafka) service REST API
pub struct KafkaClient {
    http: HttpClient,
    endpoint: Url,
}

impl KafkaClient {
    /// Create a client from toolkit configuration
    pub fn new(config: &ToolkitConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = Url::parse(&config.endpoint)?;
        let http = HttpClient::with_config(HttpClientConfig::from(config));
        Ok(Self { http, endpoint })
    }

    /// Create a client for an endpoint with default settings
    pub fn for_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Self::new(&ToolkitConfig::new(endpoint))
    }

    /// Fetch one page of SCRAM secrets for a cluster
    ///
    /// Issues `GET /v1/clusters/{clusterArn}/scram-secrets` with the
    /// request's continuation token and page size as query parameters.
    pub async fn list_scram_secrets(
        &self,
        request: &ListScramSecretsRequest,
    ) -> Result<ListScramSecretsResponse> {
        let url = self.scram_secrets_url(&request.cluster_arn)?;

        let mut config = RequestConfig::new();
        if let Some(max_results) = request.max_results {
            config = config.query("maxResults", max_results.to_string());
        }
        if let Some(next_token) = &request.next_token {
            config = config.query("nextToken", next_token.clone());
        }

        debug!(cluster_arn = %request.cluster_arn, "listing scram secrets page");
        self.http.get_json_with_config(url.as_str(), config).await
    }

    /// Build the scram-secrets URL for a cluster
    ///
    /// The cluster ARN contains `/` and must travel as a single
    /// percent-encoded path segment.
    fn scram_secrets_url(&self, cluster_arn: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("endpoint cannot be a base URL"))?
            .pop_if_empty()
            .extend(["v1", "clusters", cluster_arn, "scram-secrets"]);
        Ok(url)
    }
}

impl std::fmt::Debug for KafkaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KafkaClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
