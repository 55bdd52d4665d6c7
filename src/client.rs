//! HTTP client for the Gyazo REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    errors::{check_response, truncate_body},
    query::{ImageListQuery, UploadOptions},
    types::{DeletedImage, Image, ImageList, Profile, UploadResult},
    Error,
};

const API_BASE_URL: &str = "https://api.gyazo.com";
const UPLOAD_BASE_URL: &str = "https://upload.gyazo.com";

/// HTTP client for the Gyazo REST API.
///
/// Each call is an independent request/response exchange; the client keeps
/// no state beyond the access token and the endpoint hosts. Unless a
/// transport is injected with [`Client::with_http_client`], each request
/// builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// OAuth access token, obtained out of band.
    access_token: String,
    /// Base URL for the API host. Defaults to `https://api.gyazo.com`.
    api_base_url: String,
    /// Base URL for the upload host. Defaults to `https://upload.gyazo.com`.
    upload_base_url: String,
    /// Injected transport, if any.
    http: Option<reqwest::Client>,
}

impl Client {
    /// Creates a new client pointing at the production Gyazo hosts.
    pub fn new(access_token: &str) -> Self {
        Self::with_base_urls(access_token, API_BASE_URL, UPLOAD_BASE_URL)
    }

    /// Creates a new client with custom API and upload hosts. Used for
    /// testing with wiremock.
    pub fn with_base_urls(access_token: &str, api_base_url: &str, upload_base_url: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            api_base_url: api_base_url.to_string(),
            upload_base_url: upload_base_url.to_string(),
            http: None,
        }
    }

    /// Substitutes a preconfigured transport (proxies, instrumentation,
    /// custom timeouts) for the default per-request client.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    fn http_client(&self) -> Result<reqwest::Client, Error> {
        if let Some(http) = &self.http {
            return Ok(http.clone());
        }
        reqwest::Client::builder()
            .user_agent(concat!("gyazo_api/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Request(e)
            })
    }

    /// Builds an API-host URL with the access token already appended.
    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.api_base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }

    async fn send(&self, method: reqwest::Method, url: Url) -> Result<reqwest::Response, Error> {
        let client = self.http_client()?;
        client
            .request(method, url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request: {}", e);
                Error::Request(e)
            })
    }

    async fn request_json<T>(&self, method: reqwest::Method, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self.send(method, url).await?;
        let body = check_response(resp).await?;
        parse_body(&body)
    }

    /// Fetches the profile of the account the access token belongs to.
    pub async fn get_profile(&self) -> Result<Profile, Error> {
        let url = self.api_url("/api/users/me")?;
        self.request_json(reqwest::Method::GET, url).await
    }

    /// Fetches a single image by its id.
    pub async fn get_image(&self, image_id: &str) -> Result<Image, Error> {
        let url = self.api_url(&format!("/api/images/{}", image_id))?;
        self.request_json(reqwest::Method::GET, url).await
    }

    /// Fetches a page of the account's images, together with the pagination
    /// counters the API reports in its response headers. Missing or
    /// unparsable counter headers default to zero.
    pub async fn list_images(&self, query: &ImageListQuery) -> Result<ImageList, Error> {
        let url = query.add_to_url(&self.api_url("/api/images")?);
        let resp = self.send(reqwest::Method::GET, url).await?;

        let count = header_i64(resp.headers(), "X-Total-Count");
        let page = header_i64(resp.headers(), "X-Current-Page");
        let per = header_i64(resp.headers(), "X-Per-Page");
        let user_type = header_string(resp.headers(), "X-User-Type");

        let body = check_response(resp).await?;
        let images: Vec<Image> = parse_body(&body)?;
        Ok(ImageList {
            count,
            page,
            per,
            user_type,
            images,
        })
    }

    /// Deletes an image. Only images owned by the token's account can be
    /// deleted.
    pub async fn delete_image(&self, image_id: &str) -> Result<DeletedImage, Error> {
        let url = self.api_url(&format!("/api/images/{}", image_id))?;
        self.request_json(reqwest::Method::DELETE, url).await
    }

    /// Uploads an image to the upload host, returning the URLs Gyazo
    /// assigned to it.
    pub async fn upload(
        &self,
        image: Vec<u8>,
        options: &UploadOptions,
    ) -> Result<UploadResult, Error> {
        let url = Url::parse(format!("{}/api/upload", &self.upload_base_url).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidUrl(e)
            })?;
        let form = options.to_form(image, &self.access_token);
        let client = self.http_client()?;
        let resp = client.post(url).multipart(form).send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::Request(e)
        })?;
        let body = check_response(resp).await?;
        parse_body(&body)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(body));
        Error::Json(e)
    })
}

fn header_i64(headers: &reqwest::header::HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn header_string(headers: &reqwest::header::HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
