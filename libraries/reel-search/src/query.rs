//! Search queries over the catalog

use reel_core::types::Video;
use reel_library::VideoLibrary;

/// Search titles for a case-insensitive substring
///
/// Flagged entries are invisible to search. Results are sorted by title
/// first and filtered second, so the numbering the shell shows is stable
/// regardless of the match positions.
pub fn by_title<'a>(library: &'a VideoLibrary, term: &str) -> Vec<&'a Video> {
    let term = term.to_lowercase();
    sorted_unflagged(library)
        .into_iter()
        .filter(|video| video.title.to_lowercase().contains(&term))
        .collect()
}

/// Search for an exact tag, case-insensitively
///
/// Tags are only meaningful with their `#` prefix; a term without one
/// matches nothing.
pub fn by_tag<'a>(library: &'a VideoLibrary, tag: &str) -> Vec<&'a Video> {
    if !tag.starts_with('#') {
        return Vec::new();
    }
    let tag = tag.to_lowercase();
    sorted_unflagged(library)
        .into_iter()
        .filter(|video| video.tags.iter().any(|t| t.to_lowercase() == tag))
        .collect()
}

/// Unflagged catalog entries sorted by title, ties broken by id
fn sorted_unflagged(library: &VideoLibrary) -> Vec<&Video> {
    let mut videos: Vec<&Video> = library
        .videos()
        .into_iter()
        .filter(|video| !video.is_flagged())
        .collect();
    videos.sort_by(|a, b| {
        a.title
            .cmp(&b.title)
            .then_with(|| a.id.as_str().cmp(b.id.as_str()))
    });
    videos
}
