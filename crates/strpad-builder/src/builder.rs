//! The growable buffer itself.

use std::ffi::CString;
use std::fmt;

use crate::config::BuilderConfig;
use crate::error::{BuilderError, Result};

/// An append-only string buffer with multiplicative growth.
///
/// The builder tracks its own capacity rather than relying on the
/// allocator's rounding: when a write would not fit, capacity becomes
/// `ceil(capacity * growth_factor)`, and always at least one slot more than
/// before. Length and capacity are counted in bytes.
///
/// Finalizing consumes the builder and hands its storage to the caller
/// without copying. Dropping an unfinished builder frees the storage.
///
/// ```rust
/// use strpad_builder::StringBuilder;
///
/// let mut sb = StringBuilder::new(2, 1.5).unwrap();
/// sb.push_str("hello");
/// sb.push(' ');
/// sb.push_repeated('!', 3);
/// assert!(sb.capacity() >= sb.len());
/// assert_eq!(sb.finish(), "hello !!!");
/// ```
#[derive(Debug, Clone)]
pub struct StringBuilder {
    buf: String,
    capacity: usize,
    growth_factor: f64,
}

impl StringBuilder {
    /// Creates a builder with `initial_capacity` slots (at least one).
    ///
    /// Fails if `growth_factor` is not finite or not greater than 1.0.
    pub fn new(initial_capacity: usize, growth_factor: f64) -> Result<Self> {
        Self::from_config(&BuilderConfig::new(initial_capacity, growth_factor))
    }

    /// Creates a builder from a validated [`BuilderConfig`].
    pub fn from_config(config: &BuilderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: &BuilderConfig) -> Self {
        let capacity = config.initial_capacity.max(1);
        Self {
            buf: String::with_capacity(capacity),
            capacity,
            growth_factor: config.growth_factor,
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Slots currently reserved by the growth policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Borrows the content written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Appends a single character.
    pub fn push(&mut self, c: char) {
        self.reserve(c.len_utf8());
        self.buf.push(c);
    }

    /// Appends a string slice, growing as many steps as needed first.
    pub fn push_str(&mut self, s: &str) {
        self.reserve(s.len());
        self.buf.push_str(s);
    }

    /// Appends `count` copies of `c`.
    pub fn push_repeated(&mut self, c: char, count: usize) {
        self.reserve(c.len_utf8().saturating_mul(count));
        self.buf.extend(std::iter::repeat(c).take(count));
    }

    /// Resets the length to zero and keeps the capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns a copy of the content and leaves the builder usable.
    pub fn collect(&self) -> String {
        self.buf.clone()
    }

    /// Hands the storage over to the caller without copying.
    pub fn finish(self) -> String {
        self.buf
    }

    /// Hands the storage over as a NUL-terminated C string.
    ///
    /// The terminator is appended in place unless the content already ends
    /// with one. Fails if a NUL byte appears anywhere before the end.
    pub fn finish_c_string(self) -> Result<CString> {
        let mut bytes = self.buf.into_bytes();
        if bytes.last() == Some(&0) {
            bytes.pop();
        }
        CString::new(bytes).map_err(|e| BuilderError::InteriorNul(e.nul_position()))
    }

    fn reserve(&mut self, additional: usize) {
        let needed = self.buf.len().saturating_add(additional);
        if needed <= self.capacity {
            return;
        }

        let mut next = self.capacity;
        while next < needed {
            next = next_capacity(next, self.growth_factor);
        }
        log::trace!(
            "string builder growing from {} to {} slots ({} needed)",
            self.capacity,
            next,
            needed
        );

        self.buf.reserve_exact(next - self.buf.len());
        self.capacity = next;
    }
}

/// Next capacity step: `ceil(current * factor)`, never less than `current + 1`.
fn next_capacity(current: usize, factor: f64) -> usize {
    // float-to-int casts saturate, so huge products clamp to usize::MAX
    let scaled = (current as f64 * factor).ceil() as usize;
    scaled.max(current.saturating_add(1))
}

impl Default for StringBuilder {
    fn default() -> Self {
        Self::with_valid_config(&BuilderConfig::default())
    }
}

impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push(c);
        Ok(())
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl Extend<char> for StringBuilder {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.push(c);
        }
    }
}
