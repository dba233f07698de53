//! Session sinks - where a login token ends up on the client.

mod cookie_jar;
mod local_store;
mod navigator;

pub use cookie_jar::{Cookie, InMemoryCookieJar};
pub use local_store::{FileLocalStore, InMemoryLocalStore};
pub use navigator::RecordingNavigator;
