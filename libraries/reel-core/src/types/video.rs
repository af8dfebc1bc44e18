//! Video domain type

use crate::types::VideoId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry
///
/// Entries live for the whole run; the moderation flag is the only field
/// that changes after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,

    /// Video title (not necessarily unique)
    pub title: String,

    /// Descriptive tags, in catalog order (may be empty)
    pub tags: Vec<String>,

    /// Moderation reason; `None` means the video is not flagged
    pub flag: Option<String>,
}

impl Video {
    /// Create a new unflagged video
    pub fn new(id: VideoId, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Whether a moderation flag blocks this video
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// The moderation reason, if the video is flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }
}

impl fmt::Display for Video {
    /// Renders as `title (id) [tags]`, tags space-separated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
