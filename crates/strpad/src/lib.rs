//! Right-pads strings with spaces to a fixed width.
//!
//! Padding is built on [`StringBuilder`]: the input is streamed into a
//! fresh builder while its length is counted, the shortfall is filled with
//! spaces, and the builder's storage is returned as the result.
//!
//! Widths are measured in bytes. Input already at or past the target width
//! is returned as-is, never truncated.
//!
//! # Example
//!
//! ```rust
//! use strpad::{pad_right, try_pad_right, PadError};
//!
//! let rows = [("id", "42"), ("name", "widget")];
//! let lines: Vec<String> = rows
//!     .iter()
//!     .map(|(k, v)| format!("{}{}", pad_right(6, *k).unwrap(), v))
//!     .collect();
//! assert_eq!(lines, ["id    42", "name  widget"]);
//!
//! assert_eq!(try_pad_right(0, "x"), Err(PadError::ZeroWidth));
//! ```

mod error;
mod pad;

pub use error::{PadError, Result};
pub use pad::{pad_right, pad_right_with, try_pad_right};
pub use strpad_builder::{BuilderConfig, BuilderError, StringBuilder};
