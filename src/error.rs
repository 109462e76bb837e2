// Engine errors.
//
// Only configuration problems are errors. Empty documents, documents shorter
// than the frame size and out-of-vocabulary words are all valid input that
// simply produce fewer (or zero) matches.

/// Errors raised by `detect_matches` and the frame-size validation it runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// The requested frame size was below 1.
    #[error("frame size must be at least 1 (got {0})")]
    InvalidFrameSize(usize),
}
