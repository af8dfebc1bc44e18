//! Playback state types

use reel_core::types::Video;
use serde::{Deserialize, Serialize};

/// Playback state
///
/// `Stopped` holds exactly when no video is loaded; a loaded video is
/// always either `Playing` or `Paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No video loaded
    Stopped,
    /// Playing the current video
    Playing,
    /// Paused mid-video
    Paused,
}

/// Snapshot of what the player is doing right now
///
/// Carries the loaded entry so callers can render the full info line
/// without going back to the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing is loaded
    Idle,
    /// This video is playing
    Playing(Video),
    /// This video is loaded but paused
    Paused(Video),
}
