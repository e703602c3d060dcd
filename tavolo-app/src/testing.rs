//! Canned HTTP transport for tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use tavolo_client::{ClientError, ClientResult, HttpClient};

/// In-memory [`HttpClient`] with routes keyed by `"METHOD /path"`.
/// Records every mutating call for assertions.
#[derive(Default)]
pub struct MockHttpClient {
    routes: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<(String, Value)>>,
    token: Mutex<Option<String>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, key: &str, value: Value) {
        self.routes.lock().unwrap().insert(key.to_string(), value);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup<T: DeserializeOwned>(&self, key: &str) -> ClientResult<T> {
        let value = self
            .routes
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(key.to_string()))?;
        serde_json::from_value(value).map_err(ClientError::from)
    }

    fn record<B: Serialize>(&self, key: String, body: &B) {
        let value = serde_json::to_value(body).unwrap_or(Value::Null);
        self.calls.lock().unwrap().push((key, value));
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.lookup(&format!("GET {path}"))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let key = format!("POST {path}");
        self.record(key.clone(), body);
        self.lookup(&key)
    }

    async fn post_unit(&self, path: &str) -> ClientResult<()> {
        self.record(format!("POST {path}"), &Value::Null);
        Ok(())
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let key = format!("PUT {path}");
        self.record(key.clone(), body);
        self.lookup(&key)
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.record(format!("DELETE {path}"), &Value::Null);
        Ok(())
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}
