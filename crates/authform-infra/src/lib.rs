//! # Authform Infrastructure
//!
//! Concrete implementations of the ports defined in `authform-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network client, in-memory adapters only
//! - `http` - Auth client for the remote service via reqwest

pub mod notifier;
pub mod session;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory
pub use notifier::TracingNotifier;
pub use session::{
    Cookie, FileLocalStore, InMemoryCookieJar, InMemoryLocalStore, RecordingNavigator,
};

#[cfg(feature = "http")]
pub use http::{AuthApiConfig, HttpAuthClient, HttpClientError};
