//! Playback events
//!
//! Event-based communication for the presentation layer. The manager
//! queues an event for every observable transition; the shell drains
//! the queue after each command and renders what happened. Errors never
//! appear here, only things that actually took place.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A video started playing
    Started {
        /// Title of the video now playing
        title: String,
    },

    /// The loaded video was stopped to make room for a new one
    StoppedPrevious {
        /// Title of the replaced video
        title: String,
    },

    /// The current video was stopped, directly or as a side effect of
    /// another operation
    Stopped {
        /// Title of the stopped video
        title: String,
    },

    /// The current video was paused
    Paused {
        /// Title of the paused video
        title: String,
    },

    /// Pause was requested while the video was already paused
    AlreadyPaused {
        /// Title of the video that stayed paused
        title: String,
    },

    /// The paused video resumed playing
    Resumed {
        /// Title of the resumed video
        title: String,
    },

    /// Random playback found nothing playable
    NoVideosAvailable,

    /// A moderation flag was stored on a video
    Flagged {
        /// Title of the flagged video
        title: String,
        /// The stored reason
        reason: String,
    },

    /// A moderation flag was removed from a video
    Unflagged {
        /// Title of the unflagged video
        title: String,
    },
}
