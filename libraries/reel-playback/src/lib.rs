//! Reel Player - Playback Management
//!
//! State machine for the single current video.
//!
//! This crate provides:
//! - One current video with Stopped/Playing/Paused transitions
//! - Random playback over the unflagged part of the catalog
//! - Moderation policy (flag/unflag), including the forced stop when the
//!   current video gets flagged
//! - An event queue the presentation layer drains after each operation
//!
//! # Architecture
//!
//! The manager holds no catalog of its own: every operation takes the
//! [`reel_library::VideoLibrary`] by reference, so one session owns both
//! and nothing is global. Successful transitions queue
//! [`PlaybackEvent`]s; invalid requests come back as [`PlaybackError`]s
//! and leave the state untouched.
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{Video, VideoId};
//! use reel_library::VideoLibrary;
//! use reel_playback::{PlaybackEvent, PlaybackManager, PlaybackState};
//!
//! let library = VideoLibrary::from_videos(vec![Video::new(
//!     VideoId::new("amazing_cats_video_id"),
//!     "Amazing Cats",
//!     vec!["#cat".to_string()],
//! )]);
//! let mut manager = PlaybackManager::new();
//!
//! manager
//!     .play(&library, &VideoId::new("amazing_cats_video_id"))
//!     .unwrap();
//! assert_eq!(manager.state(), PlaybackState::Playing);
//!
//! let events = manager.drain_events();
//! assert!(matches!(&events[0], PlaybackEvent::Started { title } if title == "Amazing Cats"));
//! ```

mod error;
mod events;
mod manager;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use manager::PlaybackManager;
pub use types::{PlaybackState, PlaybackStatus};
