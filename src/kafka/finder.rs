//! SCRAM secret finder
//!
//! Flattens the paginated `ListScramSecrets` operation into one ordered
//! list of secret ARNs.

use super::client::KafkaClient;
use super::types::ListScramSecretsRequest;
use crate::error::Result;
use tracing::debug;

/// Collect every SCRAM secret ARN associated with a cluster
///
/// Pages are fetched sequentially, following the continuation token until
/// the service signals the last page. Page items are concatenated in
/// fetch order, preserving within-page order; duplicates are not removed.
/// A cluster with no secrets yields an empty vector, not an error. Any
/// page failure aborts the walk and partially accumulated results are
/// discarded.
pub async fn find_scram_secrets(client: &KafkaClient, cluster_arn: &str) -> Result<Vec<String>> {
    let mut secret_arns = Vec::new();
    let mut request = ListScramSecretsRequest::new(cluster_arn);

    loop {
        let page = client.list_scram_secrets(&request).await?;
        let is_last = page.is_last_page();

        secret_arns.extend(page.secret_arn_list);

        if is_last {
            break;
        }
        request.next_token = page.next_token;
    }

    debug!(
        cluster_arn,
        count = secret_arns.len(),
        "collected scram secrets"
    );
    Ok(secret_arns)
}
