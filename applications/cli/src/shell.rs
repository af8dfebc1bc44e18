//! Interactive command loop
//!
//! One [`Shell`] owns one [`VideoLibrary`] and one [`PlaybackManager`]
//! for the lifetime of a session. Input and output are generic so tests
//! can drive a session over in-memory buffers.

use crate::commands::{self, Command};
use crate::render;
use reel_core::types::{Video, VideoId};
use reel_library::VideoLibrary;
use reel_playback::PlaybackManager;
use std::io::{self, BufRead, Write};

/// Line-oriented shell over the catalog and playback crates
pub struct Shell<R, W> {
    library: VideoLibrary,
    manager: PlaybackManager,
    prompt: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with the default prompt.
    pub fn new(library: VideoLibrary, input: R, output: W) -> Self {
        Self::with_prompt(library, "reel> ", input, output)
    }

    /// Create a shell with a custom prompt. An empty prompt is useful for
    /// scripted sessions.
    pub fn with_prompt(
        library: VideoLibrary,
        prompt: impl Into<String>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            library,
            manager: PlaybackManager::new(),
            prompt: prompt.into(),
            input,
            output,
        }
    }

    /// The catalog this session operates on.
    pub fn library(&self) -> &VideoLibrary {
        &self.library
    }

    /// The playback state of this session.
    pub fn manager(&self) -> &PlaybackManager {
        &self.manager
    }

    /// Read and execute commands until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render::BANNER)?;
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match commands::parse(line) {
                Ok(Command::Exit) => {
                    writeln!(self.output, "{}", render::GOODBYE)?;
                    break;
                }
                Ok(command) => self.dispatch(command)?,
                Err(err) => writeln!(self.output, "{}", render::parse_error(&err))?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Help => writeln!(self.output, "{}", render::help())?,

            Command::Count => {
                writeln!(self.output, "{} videos in the library", self.library.len())?;
            }

            Command::AllVideos => {
                let mut videos = self.library.videos();
                videos.sort_by(|a, b| {
                    a.title
                        .cmp(&b.title)
                        .then_with(|| a.id.as_str().cmp(b.id.as_str()))
                });
                writeln!(self.output, "Here's a list of all available videos:")?;
                for video in videos {
                    writeln!(self.output, "{}", render::video_line(video))?;
                }
            }

            Command::Play(id) => {
                let id = VideoId::new(id);
                match self.manager.play(&self.library, &id) {
                    Ok(()) => self.flush_events()?,
                    Err(err) => {
                        writeln!(self.output, "{}", render::playback_error("play", &err))?;
                    }
                }
            }

            Command::Random => match self.manager.play_random(&self.library) {
                Ok(()) => self.flush_events()?,
                Err(err) => writeln!(self.output, "{}", render::playback_error("play", &err))?,
            },

            Command::Stop => match self.manager.stop() {
                Ok(()) => self.flush_events()?,
                Err(err) => writeln!(self.output, "{}", render::playback_error("stop", &err))?,
            },

            Command::Pause => match self.manager.pause() {
                Ok(()) => self.flush_events()?,
                Err(err) => writeln!(self.output, "{}", render::playback_error("pause", &err))?,
            },

            Command::Resume => match self.manager.resume() {
                Ok(()) => self.flush_events()?,
                Err(err) => {
                    writeln!(self.output, "{}", render::playback_error("continue", &err))?;
                }
            },

            Command::Playing => {
                let current = self.manager.status();
                writeln!(self.output, "{}", render::status(&current))?;
            }

            Command::AllPlaylists => {
                let mut playlists = self.library.playlists();
                if playlists.is_empty() {
                    writeln!(self.output, "No playlists exist yet")?;
                } else {
                    playlists.sort_by(|a, b| a.name.cmp(&b.name));
                    writeln!(self.output, "Showing all playlists:")?;
                    for playlist in playlists {
                        writeln!(self.output, "{}", playlist.name)?;
                    }
                }
            }

            Command::CreatePlaylist(name) => match self.library.create_playlist(&name) {
                Ok(()) => writeln!(self.output, "Successfully created new playlist: {name}")?,
                Err(err) => {
                    writeln!(
                        self.output,
                        "{}",
                        render::library_error("create playlist", &err)
                    )?;
                }
            },

            Command::DeletePlaylist(name) => match self.library.delete_playlist(&name) {
                Ok(()) => writeln!(self.output, "Deleted playlist: {name}")?,
                Err(err) => {
                    writeln!(
                        self.output,
                        "{}",
                        render::library_error(&format!("delete playlist {name}"), &err)
                    )?;
                }
            },

            Command::AddToPlaylist { playlist, video_id } => {
                let id = VideoId::new(video_id);
                match self.library.add_to_playlist(&playlist, &id) {
                    Ok(video) => {
                        writeln!(self.output, "Added video to {playlist}: {}", video.title)?;
                    }
                    Err(err) => {
                        writeln!(
                            self.output,
                            "{}",
                            render::library_error(&format!("add video to {playlist}"), &err)
                        )?;
                    }
                }
            }

            Command::RemoveFromPlaylist { playlist, video_id } => {
                let id = VideoId::new(video_id);
                match self.library.remove_from_playlist(&playlist, &id) {
                    Ok(video) => {
                        writeln!(self.output, "Removed video from {playlist}: {}", video.title)?;
                    }
                    Err(err) => {
                        writeln!(
                            self.output,
                            "{}",
                            render::library_error(&format!("remove video from {playlist}"), &err)
                        )?;
                    }
                }
            }

            Command::ClearPlaylist(name) => match self.library.clear_playlist(&name) {
                Ok(()) => {
                    writeln!(self.output, "Successfully removed all videos from {name}")?;
                }
                Err(err) => {
                    writeln!(
                        self.output,
                        "{}",
                        render::library_error(&format!("clear playlist {name}"), &err)
                    )?;
                }
            },

            Command::ShowPlaylist(name) => match self.library.playlist_videos(&name) {
                Ok(videos) => {
                    writeln!(self.output, "Showing playlist: {name}")?;
                    if videos.is_empty() {
                        writeln!(self.output, "No videos here yet")?;
                    } else {
                        for video in videos {
                            writeln!(self.output, "{}", render::video_line(video))?;
                        }
                    }
                }
                Err(err) => {
                    writeln!(
                        self.output,
                        "{}",
                        render::library_error(&format!("show playlist {name}"), &err)
                    )?;
                }
            },

            Command::Search(term) => {
                let results = collect_results(reel_search::by_title(&self.library, &term));
                self.present_results(&term, &results)?;
            }

            Command::SearchTag(tag) => {
                let results = collect_results(reel_search::by_tag(&self.library, &tag));
                self.present_results(&tag, &results)?;
            }

            Command::Flag { video_id, reason } => {
                let id = VideoId::new(video_id);
                match self.manager.flag(&mut self.library, &id, reason.as_deref()) {
                    Ok(()) => self.flush_events()?,
                    Err(err) => {
                        writeln!(self.output, "{}", render::playback_error("flag", &err))?;
                    }
                }
            }

            Command::Unflag(video_id) => {
                let id = VideoId::new(video_id);
                match self.manager.unflag(&mut self.library, &id) {
                    Ok(()) => self.flush_events()?,
                    Err(err) => {
                        writeln!(
                            self.output,
                            "{}",
                            render::playback_error("remove flag from", &err)
                        )?;
                    }
                }
            }

            // Exit never reaches dispatch; run() intercepts it to end the session.
            Command::Exit => {}
        }
        Ok(())
    }

    /// Print numbered search results and offer to play one of them. The
    /// answer is read from the next input line; anything that is not a
    /// number in range declines the offer.
    fn present_results(&mut self, term: &str, results: &[(VideoId, String)]) -> io::Result<()> {
        if results.is_empty() {
            writeln!(self.output, "No search results for {term}")?;
            return Ok(());
        }

        writeln!(self.output, "Here are the results for {term}:")?;
        for (position, (_, line)) in results.iter().enumerate() {
            writeln!(self.output, "{}) {line}", position + 1)?;
        }
        writeln!(
            self.output,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(
            self.output,
            "If your answer is not a valid number, we will assume it's a no."
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(());
        }
        if let Ok(number) = answer.trim().parse::<usize>() {
            if (1..=results.len()).contains(&number) {
                let id = results[number - 1].0.clone();
                match self.manager.play(&self.library, &id) {
                    Ok(()) => self.flush_events()?,
                    Err(err) => {
                        writeln!(self.output, "{}", render::playback_error("play", &err))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn flush_events(&mut self) -> io::Result<()> {
        for event in self.manager.drain_events() {
            writeln!(self.output, "{}", render::event(&event))?;
        }
        Ok(())
    }
}

fn collect_results(videos: Vec<&Video>) -> Vec<(VideoId, String)> {
    videos
        .into_iter()
        .map(|video| (video.id.clone(), video.to_string()))
        .collect()
}
