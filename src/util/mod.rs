//! Utility modules: polling (async and blocking), TTL memoization.

pub mod blocking;
pub mod cache;
pub mod poll;

pub use blocking::poll_blocking;
pub use cache::{memoize, memoize_with_ttl, Memoized, TtlSlot};
pub use poll::{next_interval, poll};
