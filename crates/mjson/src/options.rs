/// Nesting limit used by [`ParserOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Hard upper bound on nesting, whatever [`ParserOptions::max_depth`] asks for.
///
/// Dropping, comparing and printing a [`Value`](crate::Value) recurse once per
/// level, so a tree never grows deeper than this.
pub const MAX_DEPTH_CEILING: usize = 512;

/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use mjson::{DuplicateKeys, Loader, ParserOptions};
///
/// let strict = Loader::new(ParserOptions {
///     duplicate_keys: DuplicateKeys::Reject,
///     ..Default::default()
/// });
/// assert!(strict.load_text(r#"{"a": 1, "a": 2}"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// The deepest nesting of arrays and objects the parser accepts. The root
    /// container counts as depth 1.
    ///
    /// Values above [`MAX_DEPTH_CEILING`] are treated as the ceiling, so
    /// `usize::MAX` means "as deep as the parser ever goes".
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    pub max_depth: usize,

    /// What to do when an object repeats a key.
    ///
    /// # Default
    ///
    /// [`DuplicateKeys::LastWriteWins`]
    pub duplicate_keys: DuplicateKeys,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::default(),
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}

/// Policy for a key that appears more than once in the same object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The later value replaces the earlier one. The key keeps the position of
    /// its first occurrence.
    #[default]
    LastWriteWins,
    /// The parse fails with [`SyntaxError::DuplicateKey`](crate::SyntaxError::DuplicateKey).
    Reject,
}
