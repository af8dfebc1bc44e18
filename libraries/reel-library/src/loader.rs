//! Catalog loading
//!
//! The catalog source is a plain text file with one record per line:
//! three `|`-delimited fields holding the title, the unique id, and a
//! comma-separated tag list (empty for no tags). Whitespace around every
//! field and tag is insignificant.

use crate::error::{LibraryError, Result};
use reel_core::types::{Video, VideoId};
use std::fs;
use std::path::Path;

/// Parse catalog text into videos
///
/// Blank lines are skipped. A line without exactly three fields fails
/// the whole load with [`LibraryError::MalformedRecord`].
pub fn parse_catalog(input: &str) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() != 3 {
            return Err(LibraryError::MalformedRecord {
                line: index + 1,
                text: line.to_string(),
            });
        }

        let tags: Vec<String> = fields[2]
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToString::to_string)
            .collect();

        videos.push(Video::new(
            VideoId::new(fields[1].trim()),
            fields[0].trim(),
            tags,
        ));
    }

    Ok(videos)
}

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<Video>> {
    tracing::debug!("Loading catalog from {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_catalog(&contents)
}
