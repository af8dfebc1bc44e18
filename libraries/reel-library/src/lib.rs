//! Reel Player Video Library
//!
//! In-memory catalog and playlist store for Reel Player.
//!
//! This crate provides:
//! - [`VideoLibrary`], owning every catalog entry and every playlist
//! - Case-sensitive video lookup and case-insensitive playlist lookup
//! - Playlist lifecycle and membership, validated before any mutation
//! - A loader for the pipe-delimited catalog format
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{Video, VideoId};
//! use reel_library::VideoLibrary;
//!
//! let mut library = VideoLibrary::from_videos(vec![Video::new(
//!     VideoId::new("amazing_cats_video_id"),
//!     "Amazing Cats",
//!     vec!["#cat".to_string()],
//! )]);
//!
//! library.create_playlist("my_playlist").unwrap();
//! library
//!     .add_to_playlist("MY_playlist", &VideoId::new("amazing_cats_video_id"))
//!     .unwrap();
//!
//! let playlist = library.playlist("my_playlist").unwrap();
//! assert_eq!(playlist.len(), 1);
//! ```

mod error;
mod library;
pub mod loader;

pub use error::{LibraryError, Result};
pub use library::VideoLibrary;
