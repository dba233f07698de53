//! HTTP implementation of the auth client.

mod client;

pub use client::{AuthApiConfig, HttpAuthClient, HttpClientError};
