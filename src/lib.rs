// Copycheck: verbatim reuse detection between two texts
//
// This is the library root. Each module corresponds to a stage of the
// detection pipeline or one of the collaborators around it.

pub mod config;
pub mod error;
pub mod matching;
pub mod output;
pub mod text;

pub use error::DetectError;
pub use matching::{detect_matches, detect_matches_with, Detection, FrameSize};
