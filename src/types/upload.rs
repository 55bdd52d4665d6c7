use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The URLs Gyazo assigned to a freshly uploaded image.
#[derive(Serialize, Deserialize, Debug)]
pub struct UploadResult {
    /// Image id.
    pub image_id: String,

    /// Permalink URL on gyazo.com.
    pub permalink_url: String,

    /// Direct image URL.
    pub url: String,

    /// File extension, e.g. `png` or `jpg`.
    #[serde(rename = "type")]
    pub image_type: String,

    /// Thumbnail URL.
    pub thumb_url: String,

    /// When the image was created.
    pub created_at: DateTime<Utc>,
}
