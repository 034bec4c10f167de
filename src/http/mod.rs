//! HTTP client module
//!
//! A deliberately thin, synchronous-in-spirit HTTP client used by the
//! secret finder: one request per call, no retries, no backoff, no rate
//! limiting. Timeouts are whatever the underlying reqwest client enforces.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
