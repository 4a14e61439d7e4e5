//! Gallery items as seen by the carousel.
//!
//! Items are loaded by a data collaborator before the carousel mounts and are
//! never mutated while a session is open.

use std::fmt;
use std::path::PathBuf;

/// Opaque identifier of a gallery item, stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of media an item shows.
///
/// Rendering code asks for capabilities instead of matching on the kind
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    /// Whether the overlay must offer a play/pause affordance for this item.
    #[inline]
    pub fn requires_playback_control(self) -> bool {
        matches!(self, MediaType::Video)
    }

    /// Guess the media type from a file extension (case-insensitive).
    /// Unknown extensions are treated as images.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "mp4" | "webm" | "mov" | "mkv" | "ogv" => MediaType::Video,
            _ => MediaType::Image,
        }
    }
}

/// One entry of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    pub media_type: MediaType,
    pub source_path: PathBuf,
}

impl GalleryItem {
    pub fn new(id: u64, title: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        let source_path = source_path.into();
        let media_type = source_path
            .extension()
            .and_then(|e| e.to_str())
            .map(MediaType::from_extension)
            .unwrap_or_default();
        Self {
            id: ItemId(id),
            title: title.into(),
            media_type,
            source_path,
        }
    }

    /// Override the media type inferred from the path.
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }
}
