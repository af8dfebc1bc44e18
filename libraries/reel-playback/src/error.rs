//! Error types for playback

use reel_core::types::VideoId;
use thiserror::Error;

/// Playback errors
///
/// Every variant is a rejected request; the player state is unchanged
/// whenever one of these comes back.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No catalog entry with this id exists
    #[error("Video does not exist: {0}")]
    VideoNotFound(VideoId),

    /// The video is blocked by a moderation flag
    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    /// No video is loaded
    #[error("No video is currently playing")]
    NothingPlaying,

    /// The current video is playing, not paused
    #[error("Video is not paused")]
    NotPaused,

    /// The video already carries a moderation flag
    #[error("Video is already flagged")]
    AlreadyFlagged,

    /// The video carries no moderation flag
    #[error("Video is not flagged")]
    NotFlagged,

    /// Library error
    #[error("Library error: {0}")]
    Library(#[from] reel_library::LibraryError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
