/// Configuration options for the literal parser.
///
/// Every option defaults to the plain grammar: unbounded nesting and `/`
/// treated as a comment opener only when followed by `/` or `*`.
///
/// # Examples
///
/// ```rust
/// use jsonplus::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_depth: Some(2),
///     ..Default::default()
/// };
/// assert!(parse_with_options("[[1]]", options).is_ok());
/// assert!(parse_with_options("[[[1]]]", options).is_err());
/// ```
///
/// # Default
///
/// `max_depth` is `None` and all flags are `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of arrays and objects.
    ///
    /// Each array or object opens one level, so a root composite sits at
    /// depth 1. Opening a composite beyond this limit makes the input
    /// malformed; `Some(0)` admits scalars only. Without a limit, nesting is
    /// bounded only by the call stack, so callers parsing untrusted text
    /// should set one.
    ///
    /// # Default
    ///
    /// `None`
    pub max_depth: Option<usize>,

    /// Whether every `/` between tokens starts a comment.
    ///
    /// When `true`, a `/` that is not followed by `/` or `*` is an invalid
    /// comment and fails the parse, which makes regular expression literals
    /// unreachable. This matches older producers of the format that never
    /// emitted regex literals.
    ///
    /// When `false`, such a `/` is left in place and parsed as the opening
    /// delimiter of a regular expression literal.
    ///
    /// # Default
    ///
    /// `false`
    pub slash_always_opens_comment: bool,
}
