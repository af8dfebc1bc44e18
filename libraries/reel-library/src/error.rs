//! Error types for the video library

use reel_core::types::VideoId;
use thiserror::Error;

/// Library errors
#[derive(Debug, Error)]
pub enum LibraryError {
    /// No playlist with this name exists (after case folding)
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// A playlist with the same name (ignoring case) already exists
    #[error("Playlist already exists: {0}")]
    PlaylistExists(String),

    /// No catalog entry with this id exists
    #[error("Video not found: {0}")]
    VideoNotFound(VideoId),

    /// The video is blocked by a moderation flag
    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    /// The video is already a member of the playlist
    #[error("Video already in playlist")]
    AlreadyInPlaylist,

    /// The video is not a member of the playlist
    #[error("Video is not in playlist")]
    NotInPlaylist,

    /// A catalog record did not have exactly three pipe-delimited fields
    #[error("Malformed catalog record at line {line}: {text}")]
    MalformedRecord {
        /// 1-based line number in the catalog source
        line: usize,
        /// The offending line, as read
        text: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
