//! Managed-streaming (Kafka) service client
//!
//! Wire types and client for the MSK REST API, plus the SCRAM secret
//! finder that flattens the paginated `ListScramSecrets` operation.

mod client;
mod finder;
mod types;

pub use client::KafkaClient;
pub use finder::find_scram_secrets;
pub use types::{ListScramSecretsRequest, ListScramSecretsResponse};
