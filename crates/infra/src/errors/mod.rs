//! Infrastructure error handling
//!
//! External error types are converted into `RelayError` here so adapters can
//! use `?` on reqwest and roxmltree results.

pub mod conversions;

pub use conversions::InfraError;
