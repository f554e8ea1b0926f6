//! [`SessionClient`](crate::traits::SessionClient) implementations.
//!
//! - [`memory`] -- in-process session histories.
//! - [`http`] -- delivery to a running host server.

pub mod http;
pub mod memory;

pub use http::{DEFAULT_HOST_URL, HttpSessionClient};
pub use memory::{InMemorySessionClient, RecordedMessage};
