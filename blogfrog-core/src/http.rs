//! REST client for the blog backend
//!
//! Endpoints, relative to the configured service URL:
//! - `GET entries` -> previews
//! - `GET entries/{id}` -> one blog
//! - `POST entries` with `{title, content}` -> created entry

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::{AddBlogApi, BlogApi};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{BlogDetailEntry, BlogPreviewEntry, DraftPost};

const ENTRIES: &str = "entries";

/// [`BlogApi`] and [`AddBlogApi`] over HTTP
#[derive(Clone, Debug)]
pub struct HttpBlogApi {
    client: Client,
    config: ClientConfig,
}

impl HttpBlogApi {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| ApiError::Request {
                url: config.service_url.to_string(),
                source,
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path)?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| request_error(&url, source))?;
        decode(&url, response).await
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn get_blogs(&self) -> Result<Vec<BlogPreviewEntry>, ApiError> {
        self.get_json(ENTRIES).await
    }

    async fn get_blog_by_id(&self, id: i64) -> Result<BlogDetailEntry, ApiError> {
        self.get_json(&format!("{ENTRIES}/{id}")).await
    }
}

#[async_trait]
impl AddBlogApi for HttpBlogApi {
    async fn create(&self, draft: &DraftPost) -> Result<Value, ApiError> {
        let url = self.config.endpoint(ENTRIES)?;
        debug!(%url, title = %draft.title, "POST");
        let response = self
            .client
            .post(url.clone())
            .json(draft)
            .send()
            .await
            .map_err(|source| request_error(&url, source))?;
        let response = check_status(&url, response)?;

        // Some backends answer 201/204 with an empty body
        let body = response
            .bytes()
            .await
            .map_err(|source| request_error(&url, source))?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())))
    }
}

fn request_error(url: &Url, source: reqwest::Error) -> ApiError {
    ApiError::Request {
        url: url.to_string(),
        source,
    }
}

fn check_status(url: &Url, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status,
        })
    }
}

async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, ApiError> {
    check_status(url, response)?
        .json()
        .await
        .map_err(|source| request_error(url, source))
}
