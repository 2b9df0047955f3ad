//! Resource templates for videos and channels

pub mod channel;
pub mod video;
