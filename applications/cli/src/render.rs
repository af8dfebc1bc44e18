//! Output formatting for the shell
//!
//! Events, errors, and catalog lines are rendered as plain [`String`]s
//! so the wording is testable without a terminal.

use crate::commands::ParseError;
use reel_core::types::Video;
use reel_library::LibraryError;
use reel_playback::{PlaybackError, PlaybackEvent, PlaybackStatus};

/// Greeting printed when the shell starts.
pub const BANNER: &str = "Welcome to Reel Player. Enter help for a list of commands.";

/// Farewell printed when the shell exits.
pub const GOODBYE: &str = "Thanks for watching. Goodbye!";

/// One catalog line: title, id, tags, and the flag marker when set.
pub fn video_line(video: &Video) -> String {
    match video.flag_reason() {
        Some(reason) => format!("{video} - FLAGGED (reason: {reason})"),
        None => video.to_string(),
    }
}

/// The line announcing a playback event.
pub fn event(event: &PlaybackEvent) -> String {
    match event {
        PlaybackEvent::Started { title } => format!("Playing video: {title}"),
        PlaybackEvent::StoppedPrevious { title } | PlaybackEvent::Stopped { title } => {
            format!("Stopping video: {title}")
        }
        PlaybackEvent::Paused { title } => format!("Pausing video: {title}"),
        PlaybackEvent::AlreadyPaused { title } => format!("Video already paused: {title}"),
        PlaybackEvent::Resumed { title } => format!("Continuing video: {title}"),
        PlaybackEvent::NoVideosAvailable => "No videos available".to_string(),
        PlaybackEvent::Flagged { title, reason } => {
            format!("Successfully flagged video: {title} (reason: {reason})")
        }
        PlaybackEvent::Unflagged { title } => {
            format!("Successfully removed flag from video: {title}")
        }
    }
}

/// The answer to the `playing` command.
pub fn status(status: &PlaybackStatus) -> String {
    match status {
        PlaybackStatus::Idle => "No video is currently playing".to_string(),
        PlaybackStatus::Playing(video) => format!("Currently playing: {video}"),
        PlaybackStatus::Paused(video) => format!("Currently playing: {video} - PAUSED"),
    }
}

/// A rejected playback request, e.g. `Cannot play video: Video does not
/// exist`. The action slot holds the verb phrase of the attempted command.
pub fn playback_error(action: &str, err: &PlaybackError) -> String {
    format!("Cannot {action} video: {}", playback_detail(err))
}

fn playback_detail(err: &PlaybackError) -> String {
    match err {
        PlaybackError::VideoNotFound(_) => "Video does not exist".to_string(),
        PlaybackError::VideoFlagged(reason) => {
            format!("Video is currently flagged (reason: {reason})")
        }
        PlaybackError::NothingPlaying => "No video is currently playing".to_string(),
        PlaybackError::NotPaused => "Video is not paused".to_string(),
        PlaybackError::AlreadyFlagged => "Video is already flagged".to_string(),
        PlaybackError::NotFlagged => "Video is not flagged".to_string(),
        PlaybackError::Library(err) => err.to_string(),
    }
}

/// A rejected catalog or playlist request, e.g. `Cannot add video to
/// my_list: Video does not exist`. The context slot holds the attempted
/// operation with its playlist name already filled in.
pub fn library_error(context: &str, err: &LibraryError) -> String {
    format!("Cannot {context}: {}", library_detail(err))
}

fn library_detail(err: &LibraryError) -> String {
    match err {
        LibraryError::PlaylistNotFound(_) => "Playlist does not exist".to_string(),
        LibraryError::PlaylistExists(_) => {
            "A playlist with the same name already exists".to_string()
        }
        LibraryError::VideoNotFound(_) => "Video does not exist".to_string(),
        LibraryError::VideoFlagged(reason) => {
            format!("Video is currently flagged (reason: {reason})")
        }
        LibraryError::AlreadyInPlaylist => "Video already added".to_string(),
        LibraryError::NotInPlaylist => "Video is not in playlist".to_string(),
        err => err.to_string(),
    }
}

/// The complaint for an unparseable input line.
pub fn parse_error(err: &ParseError) -> String {
    match err {
        ParseError::Usage(usage) => format!("Usage: {usage}"),
        ParseError::UnknownCommand(_) | ParseError::Empty => {
            "Please enter a valid command, type help for a list of commands.".to_string()
        }
    }
}

/// The command reference printed by `help`.
pub fn help() -> &'static str {
    "Available commands:\n\
     \x20 help                               Show this list\n\
     \x20 videos                             List every video in the catalog\n\
     \x20 count                              Show how many videos are loaded\n\
     \x20 play <video_id>                    Play a video by id\n\
     \x20 random                             Play a random unflagged video\n\
     \x20 stop                               Stop the current video\n\
     \x20 pause                              Pause the current video\n\
     \x20 resume                             Resume the paused video (alias: continue)\n\
     \x20 playing                            Show what is currently playing\n\
     \x20 playlists                          List all playlists\n\
     \x20 playlist create <name>             Create a new playlist\n\
     \x20 playlist delete <name>             Delete a playlist\n\
     \x20 playlist add <name> <video_id>     Add a video to a playlist\n\
     \x20 playlist remove <name> <video_id>  Remove a video from a playlist\n\
     \x20 playlist clear <name>              Remove every video from a playlist\n\
     \x20 playlist show <name>               Show the videos in a playlist\n\
     \x20 search <term>                      Search video titles\n\
     \x20 tag <#tag>                         Search videos carrying a tag\n\
     \x20 flag <video_id> [reason]           Flag a video, blocking playback\n\
     \x20 unflag <video_id>                  Remove a video's flag\n\
     \x20 exit                               Leave the shell (alias: quit)"
}
