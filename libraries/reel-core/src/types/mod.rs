//! Domain types for the video catalog and playlists

mod ids;
mod playlist;
mod video;

pub use ids::VideoId;
pub use playlist::{Playlist, PlaylistKey};
pub use video::Video;
