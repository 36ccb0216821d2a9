//! HTTP API Layer
//!
//! Typed requests against the Momentum REST API plus base URL configuration.

pub mod client;
pub mod error;

pub use client::*;
pub use error::ApiError;
