//! pollkit: bounded polling and time-bound memoization.
//!
//! Two independent decorators over caller-supplied functions:
//!
//! - [`poll`](util::poll::poll) re-invokes an async producer until a
//!   [`PollMode`](stop::PollMode) is satisfied, an attempt ceiling is hit,
//!   or a timeout elapses, with optional backoff between attempts.
//! - [`memoize_with_ttl`](util::cache::memoize_with_ttl) caches the most
//!   recent result of a function for a fixed time-to-live.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use pollkit::prelude::*;
//!
//! # async fn example() {
//! let options = pollkit::config::exponential_backoff(Some(Duration::from_secs(10)));
//! let outcome = poll(
//!     || async { Ok::<_, String>("ready".to_string()) },
//!     PollMode::until(|status: &String| status == "ready"),
//!     &options,
//! )
//! .await;
//! assert!(outcome.is_success());
//!
//! let mut lookup = memoize_with_ttl(|key: u32| key * 2, Duration::from_secs(30));
//! assert_eq!(lookup.call(21), 42);
//! assert_eq!(lookup.call(7), 42); // arguments are ignored while the entry is fresh
//! # }
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod stop;
pub mod types;
pub mod util;
