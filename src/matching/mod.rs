// Frame matching — windows, pairwise comparison and coverage masks.

pub mod detect;
pub mod frames;
pub mod mask;
pub mod matcher;
pub mod matrix;

pub use detect::{detect_matches, detect_matches_with, Detection, Document};
pub use frames::FrameSize;
