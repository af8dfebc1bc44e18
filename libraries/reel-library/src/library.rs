//! In-memory catalog and playlist store

use crate::error::{LibraryError, Result};
use crate::loader;
use reel_core::types::{Playlist, PlaylistKey, Video, VideoId};
use std::collections::HashMap;
use std::path::Path;

/// The video library
///
/// Owns every catalog entry and every user-created playlist for the
/// lifetime of a session. Entries are keyed by their case-sensitive id,
/// playlists by the uppercased form of their name. Playlists reference
/// entries by id, so flag changes are visible everywhere immediately.
///
/// Every mutating operation validates first and mutates only on success;
/// a returned error means nothing changed.
#[derive(Debug, Default)]
pub struct VideoLibrary {
    videos: HashMap<VideoId, Video>,
    playlists: HashMap<PlaylistKey, Playlist>,
}

impl VideoLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from already-parsed catalog entries
    ///
    /// Ids are expected to be unique; when a later record reuses an id,
    /// the later record wins and the collision is logged.
    pub fn from_videos(videos: Vec<Video>) -> Self {
        let mut map = HashMap::with_capacity(videos.len());
        for video in videos {
            if let Some(previous) = map.insert(video.id.clone(), video) {
                tracing::warn!(
                    "Duplicate video id {}: keeping the later record",
                    previous.id
                );
            }
        }
        Self {
            videos: map,
            playlists: HashMap::new(),
        }
    }

    /// Load a library from a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_videos(loader::load_catalog(path)?))
    }

    // ===== Videos =====

    /// All catalog entries, in no particular order
    pub fn videos(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Look up a catalog entry by its exact id
    pub fn video(&self, id: &VideoId) -> Option<&Video> {
        self.videos.get(id)
    }

    // ===== Moderation =====

    /// Store a moderation flag on a video
    ///
    /// Overwrites any existing reason; callers that need to reject
    /// re-flagging check first.
    pub fn set_flag(&mut self, id: &VideoId, reason: impl Into<String>) -> Result<()> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| LibraryError::VideoNotFound(id.clone()))?;
        video.flag = Some(reason.into());
        Ok(())
    }

    /// Remove the moderation flag from a video
    pub fn clear_flag(&mut self, id: &VideoId) -> Result<()> {
        let video = self
            .videos
            .get_mut(id)
            .ok_or_else(|| LibraryError::VideoNotFound(id.clone()))?;
        video.flag = None;
        Ok(())
    }

    // ===== Playlist lifecycle =====

    /// All playlists, in no particular order
    pub fn playlists(&self) -> Vec<&Playlist> {
        self.playlists.values().collect()
    }

    /// Look up a playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&PlaylistKey::from_name(name))
    }

    /// Create an empty playlist, preserving the given name's case
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        let key = PlaylistKey::from_name(name);
        if self.playlists.contains_key(&key) {
            return Err(LibraryError::PlaylistExists(name.to_string()));
        }
        self.playlists.insert(key, Playlist::new(name));
        Ok(())
    }

    /// Delete a playlist and all of its memberships
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists
            .remove(&PlaylistKey::from_name(name))
            .map(|_| ())
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))
    }

    // ===== Playlist membership =====

    /// Append a video to a playlist
    ///
    /// Checks, in order: the playlist exists, the video exists, the video
    /// is not flagged, the video is not already a member. Returns the
    /// entry so callers can render its title.
    pub fn add_to_playlist(&mut self, name: &str, id: &VideoId) -> Result<&Video> {
        let playlist = self
            .playlists
            .get_mut(&PlaylistKey::from_name(name))
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?;
        let video = self
            .videos
            .get(id)
            .ok_or_else(|| LibraryError::VideoNotFound(id.clone()))?;
        if let Some(reason) = video.flag_reason() {
            return Err(LibraryError::VideoFlagged(reason.to_string()));
        }
        if !playlist.add(id.clone()) {
            return Err(LibraryError::AlreadyInPlaylist);
        }
        Ok(video)
    }

    /// Remove a video from a playlist
    ///
    /// Checks, in order: the playlist exists, the video exists, the video
    /// is a member. Flagged videos can still be removed.
    pub fn remove_from_playlist(&mut self, name: &str, id: &VideoId) -> Result<&Video> {
        let playlist = self
            .playlists
            .get_mut(&PlaylistKey::from_name(name))
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?;
        let video = self
            .videos
            .get(id)
            .ok_or_else(|| LibraryError::VideoNotFound(id.clone()))?;
        if !playlist.remove(id) {
            return Err(LibraryError::NotInPlaylist);
        }
        Ok(video)
    }

    /// Remove every member of a playlist, keeping the playlist
    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists
            .get_mut(&PlaylistKey::from_name(name))
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?
            .clear();
        Ok(())
    }

    /// Resolve a playlist's members to catalog entries, in insertion order
    pub fn playlist_videos(&self, name: &str) -> Result<Vec<&Video>> {
        let playlist = self
            .playlist(name)
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?;
        Ok(playlist
            .videos()
            .iter()
            .filter_map(|id| self.videos.get(id))
            .collect())
    }
}
