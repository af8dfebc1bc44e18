//! Command-line parsing for the shell
//!
//! A command is one keyword followed by whitespace-separated arguments.
//! Keywords are case-insensitive; arguments keep their case because video
//! ids are case-sensitive.

use thiserror::Error;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command reference
    Help,
    /// List every video in the catalog
    AllVideos,
    /// Print how many videos are loaded
    Count,
    /// Play a video by id
    Play(String),
    /// Play a random unflagged video
    Random,
    /// Stop the current video
    Stop,
    /// Pause the current video
    Pause,
    /// Resume the paused video
    Resume,
    /// Show what is currently playing
    Playing,
    /// List all playlists
    AllPlaylists,
    /// Create a playlist
    CreatePlaylist(String),
    /// Delete a playlist
    DeletePlaylist(String),
    /// Add a video to a playlist
    AddToPlaylist {
        /// Display name of the playlist
        playlist: String,
        /// Id of the video to add
        video_id: String,
    },
    /// Remove a video from a playlist
    RemoveFromPlaylist {
        /// Display name of the playlist
        playlist: String,
        /// Id of the video to remove
        video_id: String,
    },
    /// Remove every video from a playlist
    ClearPlaylist(String),
    /// Show the videos in a playlist
    ShowPlaylist(String),
    /// Search video titles for a term
    Search(String),
    /// Search videos carrying a `#tag`
    SearchTag(String),
    /// Flag a video, optionally with a reason
    Flag {
        /// Id of the video to flag
        video_id: String,
        /// Free-form reason; a placeholder is recorded when absent
        reason: Option<String>,
    },
    /// Remove a video's flag
    Unflag(String),
    /// Leave the shell
    Exit,
}

/// Why an input line is not a valid command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Empty input")]
    Empty,
}

/// Parses one input line into a [`Command`].
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Err(ParseError::Empty);
    };
    let args: Vec<&str> = words.collect();

    match keyword.to_lowercase().as_str() {
        "help" => bare(Command::Help, &args, "help"),
        "videos" => bare(Command::AllVideos, &args, "videos"),
        "count" => bare(Command::Count, &args, "count"),
        "play" => Ok(Command::Play(one(&args, "play <video_id>")?)),
        "random" => bare(Command::Random, &args, "random"),
        "stop" => bare(Command::Stop, &args, "stop"),
        "pause" => bare(Command::Pause, &args, "pause"),
        "resume" | "continue" => bare(Command::Resume, &args, "resume"),
        "playing" => bare(Command::Playing, &args, "playing"),
        "playlists" => bare(Command::AllPlaylists, &args, "playlists"),
        "playlist" => playlist(&args),
        "search" => Ok(Command::Search(joined(&args, "search <term>")?)),
        "tag" => Ok(Command::SearchTag(one(&args, "tag <#tag>")?)),
        "flag" => flag(&args),
        "unflag" => Ok(Command::Unflag(one(&args, "unflag <video_id>")?)),
        "exit" | "quit" => bare(Command::Exit, &args, "exit"),
        _ => Err(ParseError::UnknownCommand(keyword.to_string())),
    }
}

fn bare(command: Command, args: &[&str], usage: &'static str) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::Usage(usage))
    }
}

fn one(args: &[&str], usage: &'static str) -> Result<String, ParseError> {
    match args {
        [only] => Ok((*only).to_string()),
        _ => Err(ParseError::Usage(usage)),
    }
}

fn two(args: &[&str], usage: &'static str) -> Result<(String, String), ParseError> {
    match args {
        [first, second] => Ok(((*first).to_string(), (*second).to_string())),
        _ => Err(ParseError::Usage(usage)),
    }
}

fn joined(args: &[&str], usage: &'static str) -> Result<String, ParseError> {
    if args.is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(args.join(" "))
    }
}

fn playlist(args: &[&str]) -> Result<Command, ParseError> {
    const USAGE: &str = "playlist <create|delete|add|remove|clear|show> ...";
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(ParseError::Usage(USAGE));
    };

    match subcommand.to_lowercase().as_str() {
        "create" => Ok(Command::CreatePlaylist(one(rest, "playlist create <name>")?)),
        "delete" => Ok(Command::DeletePlaylist(one(rest, "playlist delete <name>")?)),
        "add" => {
            let (playlist, video_id) = two(rest, "playlist add <name> <video_id>")?;
            Ok(Command::AddToPlaylist { playlist, video_id })
        }
        "remove" => {
            let (playlist, video_id) = two(rest, "playlist remove <name> <video_id>")?;
            Ok(Command::RemoveFromPlaylist { playlist, video_id })
        }
        "clear" => Ok(Command::ClearPlaylist(one(rest, "playlist clear <name>")?)),
        "show" => Ok(Command::ShowPlaylist(one(rest, "playlist show <name>")?)),
        _ => Err(ParseError::Usage(USAGE)),
    }
}

fn flag(args: &[&str]) -> Result<Command, ParseError> {
    let Some((video_id, rest)) = args.split_first() else {
        return Err(ParseError::Usage("flag <video_id> [reason]"));
    };
    let reason = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    Ok(Command::Flag {
        video_id: (*video_id).to_string(),
        reason,
    })
}
