use thiserror::Error;

/// The one failure the parser reports.
///
/// Input either matches the grammar in full or it does not; no position or
/// reason is attached. Characters may already have been consumed when a
/// failure is detected, so the only guarantee is that *some* part of the
/// input was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("malformed input")]
pub struct MalformedInput;

pub(crate) type Result<T, E = MalformedInput> = core::result::Result<T, E>;
