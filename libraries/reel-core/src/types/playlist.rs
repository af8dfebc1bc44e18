//! Playlist domain types

use crate::types::VideoId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-insensitive playlist lookup key
///
/// Two names that differ only in case derive the same key, which is how
/// playlist uniqueness and lookup work everywhere in the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistKey(String);

impl PlaylistKey {
    /// Derive the key from a playlist name
    pub fn from_name(name: &str) -> Self {
        Self(name.to_uppercase())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-created, ordered collection of catalog entries
///
/// Members are stored as ids, not copies: the catalog owns every entry.
/// Insertion order is preserved and duplicates are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, exactly as given at creation
    pub name: String,

    videos: Vec<VideoId>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// The lookup key for this playlist's name
    pub fn key(&self) -> PlaylistKey {
        PlaylistKey::from_name(&self.name)
    }

    /// Append a video to the end; returns `false` when already a member
    pub fn add(&mut self, id: VideoId) -> bool {
        if self.videos.contains(&id) {
            return false;
        }
        self.videos.push(id);
        true
    }

    /// Remove a video; returns `false` when not a member
    pub fn remove(&mut self, id: &VideoId) -> bool {
        match self.videos.iter().position(|member| member == id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every member, keeping the playlist itself
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Whether the video is a member
    pub fn contains(&self, id: &VideoId) -> bool {
        self.videos.contains(id)
    }

    /// Member ids in insertion order
    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the playlist has no members
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
