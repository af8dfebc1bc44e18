//! Reel Player Core
//!
//! Shared domain types for Reel Player.
//!
//! This crate provides the foundational building blocks used by the
//! library, playback, search, and CLI crates:
//! - **Catalog types**: [`Video`], [`VideoId`]
//! - **Playlist types**: [`Playlist`], [`PlaylistKey`]
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{Playlist, Video, VideoId};
//!
//! // A catalog entry
//! let video = Video::new(
//!     VideoId::new("amazing_cats_video_id"),
//!     "Amazing Cats",
//!     vec!["#cat".to_string(), "#animal".to_string()],
//! );
//! assert!(!video.is_flagged());
//!
//! // A playlist holding it
//! let mut playlist = Playlist::new("my_PLAYlist");
//! assert!(playlist.add(video.id.clone()));
//! assert_eq!(playlist.key().as_str(), "MY_PLAYLIST");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

// Re-export commonly used types
pub use types::{Playlist, PlaylistKey, Video, VideoId};
