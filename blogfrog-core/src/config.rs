//! HTTP client settings

use std::time::Duration;

use url::Url;

use crate::error::ApiError;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the backend lives and how long a request may take
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parse `service_url`; a trailing slash is added so endpoint paths join below it.
    pub fn new(service_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut service_url = Url::parse(service_url)?;
        if !service_url.path().ends_with('/') {
            let path = format!("{}/", service_url.path());
            service_url.set_path(&path);
        }
        Ok(Self {
            service_url,
            timeout,
        })
    }

    /// Absolute URL for an endpoint path relative to the service root
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.service_url.join(path.trim_start_matches('/'))?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT)
            .expect("DEFAULT_SERVICE_URL is a valid absolute url")
    }
}
