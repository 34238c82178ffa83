//! Render target: the image and caption slots a panel displays

use serde::Serialize;

use crate::error::ApodError;
use crate::types::ApodRecord;

/// Caption shown when the fetched entry is a video or other non-image media
pub const NOT_AN_IMAGE: &str = "Random APOD fetched was not an image.";

/// Image reference slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    pub src: Option<String>,
    /// Accessible label
    pub title: Option<String>,
}

/// The two output slots owned by a panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderTarget {
    pub image: ImageSlot,
    pub caption: String,
}

/// Result of one settled fetch, ready to be written to a [`RenderTarget`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderUpdate {
    /// Image entry: both slots are written
    Picture {
        src: String,
        title: String,
        caption: String,
    },
    /// Anything else: only the caption is written
    Caption(String),
}

/// Caption for an image entry: the title, plus the copyright holder if any
pub fn caption_for(record: &ApodRecord) -> String {
    match record.copyright_holder() {
        Some(holder) => format!("{} (Copyright {})", record.title, holder),
        None => record.title.clone(),
    }
}

impl RenderUpdate {
    /// Map a fetch outcome to its slot update.
    ///
    /// `None` means the failure is not shown and the slots stay as they are.
    pub fn from_outcome(outcome: &Result<ApodRecord, ApodError>) -> Option<Self> {
        match outcome {
            Ok(record) if record.is_image() => Some(RenderUpdate::Picture {
                src: record.url.clone(),
                title: record.title.clone(),
                caption: caption_for(record),
            }),
            Ok(_) => Some(RenderUpdate::Caption(NOT_AN_IMAGE.to_string())),
            Err(e) => e.caption().map(RenderUpdate::Caption),
        }
    }
}

impl RenderTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: RenderUpdate) {
        match update {
            RenderUpdate::Picture {
                src,
                title,
                caption,
            } => {
                self.image.src = Some(src);
                self.image.title = Some(title);
                self.caption = caption;
            }
            RenderUpdate::Caption(caption) => {
                self.caption = caption;
            }
        }
    }
}
