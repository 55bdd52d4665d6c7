//! Request builders: listing query parameters and upload form fields.

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use url::Url;

/// Query parameters for the image-listing endpoint.
#[derive(Default, Clone, Copy)]
pub struct ImageListQuery {
    /// Page number (1-indexed). `None` uses the API default of 1.
    pub page: Option<i64>,
    /// Images per page, 1 to 100. `None` uses the API default of 20.
    pub per: Option<i64>,
}

impl ImageListQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of images per page. Values outside 1..=100 are
    /// clamped before being sent.
    pub fn with_per(mut self, per: i64) -> Self {
        self.per = Some(per);
        self
    }

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. Unset parameters are omitted.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(per) = self.per {
            url.query_pairs_mut()
                .append_pair("per_page", &per.clamp(1, 100).to_string());
        }
        if let Some(page) = self.page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        url
    }
}

/// Metadata fields for the upload endpoint. Everything is optional; an
/// upload needs only the image bytes and the access token.
#[derive(Default, Clone)]
pub struct UploadOptions {
    /// File name reported for the image part. Defaults to `image.png`.
    pub filename: Option<String>,
    /// Image title, shown in Gyazo's "From xxx" field.
    pub title: Option<String>,
    /// Image description, shown where Gyazo keeps hashtags.
    pub description: Option<String>,
    /// When the image was created. Sent as Unix seconds.
    pub created: Option<DateTime<Utc>>,
    /// Whether the image metadata is public. Defaults to private.
    pub metadata_is_public: bool,
    /// Collection to add the image to.
    pub collection_id: Option<String>,
    /// URL the image relates to.
    pub referer_url: Option<Url>,
    /// Name of the app that created the image.
    pub app: Option<String>,
}

impl UploadOptions {
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = Some(filename.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_metadata_is_public(mut self, public: bool) -> Self {
        self.metadata_is_public = public;
        self
    }

    pub fn with_collection_id(mut self, collection_id: &str) -> Self {
        self.collection_id = Some(collection_id.to_string());
        self
    }

    pub fn with_referer_url(mut self, referer_url: Url) -> Self {
        self.referer_url = Some(referer_url);
        self
    }

    pub fn with_app(mut self, app: &str) -> Self {
        self.app = Some(app.to_string());
        self
    }

    /// Builds the multipart form for an upload: the image part, the access
    /// token, and whichever optional fields are set.
    pub(crate) fn to_form(&self, image: Vec<u8>, access_token: &str) -> Form {
        let filename = self
            .filename
            .clone()
            .unwrap_or_else(|| "image.png".to_string());
        let mut form = Form::new()
            .part("imagedata", Part::bytes(image).file_name(filename))
            .text("access_token", access_token.to_string());
        if let Some(referer_url) = &self.referer_url {
            form = form.text("referer_url", referer_url.to_string());
        }
        if let Some(app) = &self.app {
            form = form.text("app", app.clone());
        }
        if let Some(title) = &self.title {
            form = form.text("title", title.clone());
        }
        if let Some(description) = &self.description {
            form = form.text("desc", description.clone());
        }
        if let Some(collection_id) = &self.collection_id {
            form = form.text("collection_id", collection_id.clone());
        }
        if self.metadata_is_public {
            form = form.text("metadata_is_public", "true");
        }
        if let Some(created) = self.created {
            form = form.text("created_at", created.timestamp().to_string());
        }
        form
    }
}
