//! HTTP transport for the reservation backend

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::error::ApiErrorCode;
use shared::response::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// The seam between the app layer and the network; the app is generic
/// over this so tests can substitute a canned transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// POST without a body, discarding any response payload
    async fn post_unit(&self, path: &str) -> ClientResult<()>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// DELETE, discarding any response payload
    async fn delete(&self, path: &str) -> ClientResult<()>;
    fn set_token(&self, token: Option<String>);
    fn token(&self) -> Option<String>;
}

/// Map a non-2xx response body to a typed error.
///
/// The backend usually replies with a `{code, message}` envelope; when
/// the body is something else the HTTP status decides the variant.
fn decode_error(status: StatusCode, body: &str) -> ClientError {
    if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
        && let Ok(code) = ApiErrorCode::parse(&envelope.code)
    {
        return ClientError::api(code, envelope.message);
    }
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(body.to_string()),
        StatusCode::NOT_FOUND => ClientError::NotFound(body.to_string()),
        StatusCode::BAD_REQUEST => ClientError::Validation(body.to_string()),
        _ => ClientError::Internal(body.to_string()),
    }
}

/// Network HTTP client
#[derive(Debug)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(config.token.clone()),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token
            .read()
            .ok()
            .and_then(|t| t.as_ref().map(|t| format!("Bearer {t}")))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(%status, "backend returned an error body");
            return Err(decode_error(status, &text));
        }
        Ok(response.json().await?)
    }

    async fn handle_unit_response(&self, response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(decode_error(status, &text));
        }
        Ok(())
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn post_unit(&self, path: &str) -> ClientResult<()> {
        let response = self.request(reqwest::Method::POST, path).send().await?;
        self.handle_unit_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        self.handle_unit_response(response).await
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }
}
