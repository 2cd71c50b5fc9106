//! HTTP client plumbing shared by upstream integrations

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
