//! APOD API data types

use serde::{Deserialize, Serialize};

/// Media kind of an APOD entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything the service adds later; rendered like a video
    #[serde(other)]
    Other,
}

/// One Astronomy Picture of the Day entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApodRecord {
    /// Copyright holder, absent for public domain images
    #[serde(default)]
    pub copyright: Option<String>,
    /// Entry date, "YYYY-MM-DD"
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub explanation: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub title: String,
    /// Resource URL; only an image reference when `media_type` is `Image`
    #[serde(default)]
    pub url: String,
}

impl ApodRecord {
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }

    /// Copyright holder if one is named
    pub fn copyright_holder(&self) -> Option<&str> {
        self.copyright.as_deref().filter(|c| !c.is_empty())
    }
}

/// Error payload sent alongside non-2xx statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetail {
    /// Service-specific code, string or number depending on the gateway
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The `error.message` field when present and non-empty
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .filter(|m| !m.is_empty())
    }
}
