// Cache module for fetched entities.
// Holds posts and users in memory for the lifetime of the service.

pub mod store;

pub use store::{CacheCounters, EntityCache};
