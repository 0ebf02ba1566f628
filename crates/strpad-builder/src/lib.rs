//! Growable string buffer with a configurable growth factor.
//!
//! [`StringBuilder`] accumulates text with amortized constant-time appends
//! and then hands its storage to the caller without a defensive copy.
//!
//! # Example
//!
//! ```rust
//! use strpad_builder::{BuilderConfig, StringBuilder};
//!
//! let mut sb = StringBuilder::from_config(&BuilderConfig::default()).unwrap();
//! sb.push_str("name");
//! sb.push_repeated(' ', 4);
//! assert_eq!(sb.finish(), "name    ");
//! ```
//!
//! # Growth
//!
//! When an append does not fit, capacity is multiplied by the growth
//! factor and rounded up:
//!
//! ```text
//! next = max(ceil(capacity * growth_factor), capacity + 1)
//! ```
//!
//! The step repeats until the pending write fits. With the defaults
//! (15 slots, factor 1.5) the sequence is 15, 23, 35, 53, ...

mod builder;
mod config;
mod error;

pub use builder::StringBuilder;
pub use config::{BuilderConfig, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY};
pub use error::{BuilderError, Result};
