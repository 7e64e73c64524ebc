//! Clients - HTTP Clients for External APIs
//!
//! This module contains the HTTP client for the providers' live fleet feeds.

pub mod feed_client;

pub use feed_client::{FeedSource, HttpFeedClient};
