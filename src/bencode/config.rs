/// Nesting bound applied by the default configuration.
///
/// The decoder recurses once per list or dictionary, so some bound is needed
/// to turn hostile nesting into an error instead of a stack overflow.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Nesting bound used by [`DecoderConfig::strict`].
pub const STRICT_MAX_DEPTH: usize = 64;

/// Options controlling how strictly a [`Decoder`](super::Decoder) reads its input.
///
/// The default configuration is permissive: integers without digits decode to
/// zero, leading zeros are accepted, bytes after the first complete value are
/// ignored, and nesting is bounded by [`DEFAULT_MAX_DEPTH`].
///
/// # Examples
///
/// ```
/// use bencoder::{Decoder, DecoderConfig};
///
/// assert!(Decoder::new().decode(b"ie").is_ok());
///
/// let strict = Decoder::with_config(DecoderConfig::strict());
/// assert!(strict.decode(b"ie").is_err());
/// assert!(strict.decode(b"i03e").is_err());
/// assert!(strict.decode(b"i42eextra").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Reject integers with no digits, leading zeros or `-0`, and string
    /// lengths with leading zeros.
    pub strict_integers: bool,
    /// Fail when input remains after the first complete value.
    pub reject_trailing_data: bool,
    /// Maximum number of nested lists and dictionaries. `None` removes the
    /// bound and leaves the thread's stack as the only limit.
    pub max_depth: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict_integers: false,
            reject_trailing_data: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl DecoderConfig {
    /// Enables every check, with nesting bounded by [`STRICT_MAX_DEPTH`].
    pub fn strict() -> Self {
        Self {
            strict_integers: true,
            reject_trailing_data: true,
            max_depth: Some(STRICT_MAX_DEPTH),
        }
    }

    /// Sets the nesting bound to `Some(depth)`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
