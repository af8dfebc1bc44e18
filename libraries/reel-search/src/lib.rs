//! Reel Player - Catalog Search
//!
//! Stateless queries over the video library. Searches never surface
//! flagged entries, and results always come back sorted by title so the
//! shell can number them for the follow-up play prompt.
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{Video, VideoId};
//! use reel_library::VideoLibrary;
//!
//! let library = VideoLibrary::from_videos(vec![
//!     Video::new(VideoId::new("cats"), "Amazing Cats", vec!["#cat".to_string()]),
//!     Video::new(VideoId::new("dogs"), "Funny Dogs", vec!["#dog".to_string()]),
//! ]);
//!
//! let hits = reel_search::by_title(&library, "cat");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Amazing Cats");
//!
//! let hits = reel_search::by_tag(&library, "#DOG");
//! assert_eq!(hits[0].title, "Funny Dogs");
//! ```

mod query;

pub use query::{by_tag, by_title};
