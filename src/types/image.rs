use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored image.
#[derive(Serialize, Deserialize, Debug)]
pub struct Image {
    /// Image id.
    pub image_id: String,

    /// Permalink URL on gyazo.com.
    pub permalink_url: String,

    /// Direct image URL.
    pub url: String,

    /// OCR result. The single-image endpoint may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr: Option<Ocr>,

    /// Image metadata. The single-image endpoint may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,

    /// File extension, e.g. `png` or `jpg`.
    #[serde(rename = "type")]
    pub image_type: String,

    /// Thumbnail URL.
    pub thumb_url: String,

    /// When the image was created.
    pub created_at: DateTime<Utc>,
}

/// Text recognized in an image.
#[derive(Serialize, Deserialize, Debug)]
pub struct Ocr {
    /// Language of the recognized text. `null` when OCR produced nothing.
    pub locale: Option<String>,

    /// The recognized text; empty when OCR produced nothing.
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ImageMetadata {
    /// Name of the app that created the image.
    pub app: Option<String>,

    /// Image title.
    pub title: String,

    /// URL the image was captured from.
    pub url: Option<String>,

    /// Image description.
    pub desc: String,

    /// Title before editing; `null` if never edited.
    pub original_title: Option<String>,

    /// URL before editing; `null` if never edited.
    pub original_url: Option<String>,
}

/// A page of images, combined with the pagination counters the API reports
/// in its response headers. Assembled by [`crate::Client::list_images`],
/// never deserialized as one document.
#[derive(Serialize, Debug)]
pub struct ImageList {
    /// Total number of images in the account (`X-Total-Count`).
    pub count: i64,

    /// Current page (`X-Current-Page`).
    pub page: i64,

    /// Images per page (`X-Per-Page`).
    pub per: i64,

    /// Account type label (`X-User-Type`).
    pub user_type: String,

    pub images: Vec<Image>,
}

/// Receipt returned when an image is deleted.
#[derive(Serialize, Deserialize, Debug)]
pub struct DeletedImage {
    /// Id of the deleted image.
    pub image_id: String,

    /// File extension of the deleted image.
    #[serde(rename = "type")]
    pub image_type: String,
}
