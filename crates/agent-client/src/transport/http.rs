use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde_json::Value;

use super::config::TransportConfig;
use super::HttpTransport;
use crate::errors::TransportError;

/// [`HttpTransport`] backed by a pooled `reqwest` client.
pub struct HttpClientTransport {
    client: Client,
    config: TransportConfig,
}

impl HttpClientTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config)?)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    async fn decode(response: Response) -> Result<Value, TransportError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn default_headers(config: &TransportConfig) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();

    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(format!("invalid header name: {}", name)))?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            TransportError::InvalidHeader(format!("invalid value for header {}", name))
        })?;
        headers.insert(header_name, header_value);
    }

    if let Some(token) = &config.token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| TransportError::InvalidHeader("invalid bearer token".to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

#[async_trait]
impl HttpTransport for HttpClientTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.config.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.config.url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }
}
