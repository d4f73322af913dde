//! Core client implementation

use crate::config::{ClientConfig, Validate};
use crate::utils::error::{Result, TaskManagerError};
use crate::utils::logging::sanitize_log_data;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client bound to one service base URL and one bearer token
#[derive(Debug, Clone)]
pub struct TaskManagerClient {
    pub(crate) config: ClientConfig,
    pub(crate) http_client: reqwest::Client,
}

impl TaskManagerClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TaskManagerError::config(format!("Client config error: {}", e)))?;

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| TaskManagerError::config(format!("Invalid token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| TaskManagerError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("Task manager client created for {}", config.base_url);

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.http_client.request(method, url)
    }

    /// Send and turn non-2xx answers into errors carrying the server message
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(TaskManagerError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("{}", failure_log_line(status.as_u16(), &body));
        Err(TaskManagerError::from_status(status.as_u16(), &body))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.fetch_json(Method::GET, path).await
    }

    /// Bodiless request with a JSON answer
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T> {
        let response = self.send(self.request(method, path)).await?;
        response.json().await.map_err(TaskManagerError::from_transport)
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path).json(body)).await?;
        response.json().await.map_err(TaskManagerError::from_transport)
    }

    /// Call an endpoint that answers without a body
    pub(crate) async fn send_empty<B>(&self, method: Method, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.request(method, path).json(body))
            .await
            .map(|_| ())
    }

    /// Call an endpoint that takes no body and answers without one
    pub(crate) async fn call(&self, method: Method, path: &str) -> Result<()> {
        self.send(self.request(method, path)).await.map(|_| ())
    }
}

/// Log line for a rejected request, with credentials echoed by the server masked
pub(crate) fn failure_log_line(status: u16, body: &str) -> String {
    format!("Request failed with {}: {}", status, sanitize_log_data(body))
}

/// Percent-encode a value for use as a single path segment
pub(crate) fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
