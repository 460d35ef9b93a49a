// REST API module.
// Provides the transport abstraction, its HTTP implementation and response types.

pub mod client;
pub mod transport;
pub mod types;

pub use client::HttpTransport;
pub use transport::{ApiRequest, Transport};
pub use types::{Entity, EntityKind, Post, User};
