//! Playback management

use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::types::{PlaybackState, PlaybackStatus};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use reel_core::types::{Video, VideoId};
use reel_library::VideoLibrary;

/// Reason stored when a video is flagged without one
const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Playback manager
///
/// Tracks the single current video and its Stopped/Playing/Paused state,
/// and owns moderation policy. Catalog access goes through the
/// [`VideoLibrary`] handed to each operation; the manager keeps a clone
/// of the loaded entry and never holds a library reference across calls.
///
/// Validation always happens before mutation: an `Err` return means the
/// player is exactly as it was.
pub struct PlaybackManager {
    state: PlaybackState,
    current: Option<Video>,

    // Event queue for the presentation layer
    pending_events: Vec<PlaybackEvent>,
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackManager {
    /// Create a new playback manager with nothing loaded
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Stopped,
            current: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback control =====

    /// Play a video by id
    ///
    /// A loaded video is stopped first and replaced atomically. Unknown
    /// ids and flagged videos are rejected without touching the current
    /// video.
    pub fn play(&mut self, library: &VideoLibrary, id: &VideoId) -> Result<()> {
        let video = library
            .video(id)
            .ok_or_else(|| PlaybackError::VideoNotFound(id.clone()))?;
        if let Some(reason) = video.flag_reason() {
            return Err(PlaybackError::VideoFlagged(reason.to_string()));
        }

        let video = video.clone();
        if let Some(previous) = self.current.take() {
            self.emit_stopped_previous(previous.title);
        }
        self.emit_started(video.title.clone());
        self.current = Some(video);
        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Stop the current video
    pub fn stop(&mut self) -> Result<()> {
        match self.current.take() {
            Some(video) => {
                self.state = PlaybackState::Stopped;
                self.emit_stopped(video.title);
                Ok(())
            }
            None => Err(PlaybackError::NothingPlaying),
        }
    }

    /// Play a uniformly random unflagged video
    ///
    /// A loaded video is stopped first, as if [`stop`](Self::stop) were
    /// called. An empty playable set queues
    /// [`PlaybackEvent::NoVideosAvailable`] and succeeds; it is a
    /// signal, not an error.
    pub fn play_random(&mut self, library: &VideoLibrary) -> Result<()> {
        self.play_random_with(library, &mut thread_rng())
    }

    /// Play a random unflagged video using the given RNG
    ///
    /// Split out from [`play_random`](Self::play_random) so tests can
    /// drive selection with a seeded RNG.
    pub fn play_random_with(&mut self, library: &VideoLibrary, rng: &mut impl Rng) -> Result<()> {
        let playable: Vec<&Video> = library
            .videos()
            .into_iter()
            .filter(|video| !video.is_flagged())
            .collect();

        match playable.choose(rng) {
            Some(video) => {
                let id = video.id.clone();
                if self.current.is_some() {
                    self.stop()?;
                }
                self.play(library, &id)
            }
            None => {
                self.emit_no_videos_available();
                Ok(())
            }
        }
    }

    /// Pause the current video
    ///
    /// Pausing an already-paused video changes nothing but still queues
    /// [`PlaybackEvent::AlreadyPaused`].
    pub fn pause(&mut self) -> Result<()> {
        let title = self
            .current
            .as_ref()
            .map(|video| video.title.clone())
            .ok_or(PlaybackError::NothingPlaying)?;

        if self.state == PlaybackState::Paused {
            self.emit_already_paused(title);
        } else {
            self.state = PlaybackState::Paused;
            self.emit_paused(title);
        }
        Ok(())
    }

    /// Resume the paused video
    ///
    /// Resuming while playing is rejected; the video keeps playing.
    pub fn resume(&mut self) -> Result<()> {
        let title = self
            .current
            .as_ref()
            .map(|video| video.title.clone())
            .ok_or(PlaybackError::NothingPlaying)?;

        if self.state == PlaybackState::Playing {
            return Err(PlaybackError::NotPaused);
        }
        self.state = PlaybackState::Playing;
        self.emit_resumed(title);
        Ok(())
    }

    // ===== Introspection =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The loaded video, if any
    pub fn current_video(&self) -> Option<&Video> {
        self.current.as_ref()
    }

    /// Snapshot of the loaded video and whether it is paused
    pub fn status(&self) -> PlaybackStatus {
        match (&self.current, self.state) {
            (Some(video), PlaybackState::Paused) => PlaybackStatus::Paused(video.clone()),
            (Some(video), _) => PlaybackStatus::Playing(video.clone()),
            (None, _) => PlaybackStatus::Idle,
        }
    }

    // ===== Moderation =====

    /// Store a moderation flag on a video
    ///
    /// An absent or empty reason is stored as `Not supplied`. Flagging
    /// the video that is currently loaded stops it first.
    pub fn flag(
        &mut self,
        library: &mut VideoLibrary,
        id: &VideoId,
        reason: Option<&str>,
    ) -> Result<()> {
        let video = library
            .video(id)
            .ok_or_else(|| PlaybackError::VideoNotFound(id.clone()))?;
        if video.is_flagged() {
            return Err(PlaybackError::AlreadyFlagged);
        }
        let title = video.title.clone();
        let reason = match reason {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => DEFAULT_FLAG_REASON.to_string(),
        };

        library.set_flag(id, reason.clone())?;
        if self.current.as_ref().is_some_and(|current| current.id == *id) {
            self.stop()?;
        }
        self.emit_flagged(title, reason);
        Ok(())
    }

    /// Remove the moderation flag from a video
    pub fn unflag(&mut self, library: &mut VideoLibrary, id: &VideoId) -> Result<()> {
        let video = library
            .video(id)
            .ok_or_else(|| PlaybackError::VideoNotFound(id.clone()))?;
        if !video.is_flagged() {
            return Err(PlaybackError::NotFlagged);
        }
        let title = video.title.clone();

        library.clear_flag(id)?;
        self.emit_unflagged(title);
        Ok(())
    }

    // ===== Events =====

    /// Drain all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether any events are waiting to be drained
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_started(&mut self, title: String) {
        self.pending_events.push(PlaybackEvent::Started { title });
    }

    fn emit_stopped_previous(&mut self, title: String) {
        self.pending_events
            .push(PlaybackEvent::StoppedPrevious { title });
    }

    fn emit_stopped(&mut self, title: String) {
        self.pending_events.push(PlaybackEvent::Stopped { title });
    }

    fn emit_paused(&mut self, title: String) {
        self.pending_events.push(PlaybackEvent::Paused { title });
    }

    fn emit_already_paused(&mut self, title: String) {
        self.pending_events
            .push(PlaybackEvent::AlreadyPaused { title });
    }

    fn emit_resumed(&mut self, title: String) {
        self.pending_events.push(PlaybackEvent::Resumed { title });
    }

    fn emit_no_videos_available(&mut self) {
        self.pending_events.push(PlaybackEvent::NoVideosAvailable);
    }

    fn emit_flagged(&mut self, title: String, reason: String) {
        self.pending_events
            .push(PlaybackEvent::Flagged { title, reason });
    }

    fn emit_unflagged(&mut self, title: String) {
        self.pending_events.push(PlaybackEvent::Unflagged { title });
    }
}
