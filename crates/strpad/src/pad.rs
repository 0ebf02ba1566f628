use log::debug;
use strpad_builder::{BuilderConfig, StringBuilder};

use crate::error::{PadError, Result};

/// Pads `input` on the right with spaces so the result is `width` bytes long.
///
/// Returns `None` when `width` is zero or `input` is `None`. Input that is
/// already `width` bytes or longer comes back unchanged; nothing is ever
/// truncated.
///
/// # Example
///
/// ```rust
/// use strpad::pad_right;
///
/// assert_eq!(pad_right(10, "hi").as_deref(), Some("hi        "));
/// assert_eq!(pad_right(2, "hello").as_deref(), Some("hello"));
/// assert_eq!(pad_right(0, "hi"), None);
/// assert_eq!(pad_right(3, None), None);
/// ```
pub fn pad_right<'a>(width: usize, input: impl Into<Option<&'a str>>) -> Option<String> {
    try_pad_right(width, input).ok()
}

/// Like [`pad_right`], but reports why a request was rejected.
pub fn try_pad_right<'a>(width: usize, input: impl Into<Option<&'a str>>) -> Result<String> {
    pad_right_with(width, input, &BuilderConfig::default())
}

/// Pads using a builder sized by `config`.
///
/// ```rust
/// use strpad::{pad_right_with, BuilderConfig};
///
/// let config = BuilderConfig::new(64, 2.0);
/// assert_eq!(pad_right_with(4, "ab", &config).unwrap(), "ab  ");
/// ```
pub fn pad_right_with<'a>(
    width: usize,
    input: impl Into<Option<&'a str>>,
    config: &BuilderConfig,
) -> Result<String> {
    if width == 0 {
        debug!("pad_right rejected: zero width");
        return Err(PadError::ZeroWidth);
    }
    let input = input.into().ok_or_else(|| {
        debug!("pad_right rejected: no input");
        PadError::MissingInput
    })?;

    let mut sb = StringBuilder::from_config(config)?;
    let mut len = 0usize;
    for c in input.chars() {
        sb.push(c);
        len += c.len_utf8();
    }

    match width.checked_sub(len) {
        None | Some(0) => Ok(sb.finish()),
        Some(missing) => {
            sb.push_repeated(' ', missing);
            Ok(sb.finish())
        }
    }
}
