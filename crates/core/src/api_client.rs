//! HTTP API client with optional bearer-token injection.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::session_store::SessionStore;
use crate::{log_debug, log_warn};

/// HTTP client bound to one service base URL.
///
/// When a session is attached, every request reads the token at send time
/// and carries it as `Authorization: Bearer <token>`. Without a token the
/// request goes out unauthenticated and the service decides.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Option<Arc<SessionStore>>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            session: None,
        }
    }

    /// Share an existing connection pool
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach the session whose token authorizes requests
    pub fn with_bearer(mut self, session: Arc<SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    fn authorize(&self, rb: RequestBuilder) -> RequestBuilder {
        let token = self
            .session
            .as_ref()
            .and_then(|session| session.token())
            .filter(|token| !token.is_empty());

        match token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    /// Send the request and return the body text of a 2xx response.
    async fn send(&self, method: &str, url: &str, rb: RequestBuilder) -> Result<String, ApiError> {
        log_debug!("{method} {url}");

        let resp = self.authorize(rb).send().await.map_err(|e| {
            log_warn!("{method} {url} failed: {e}");
            ApiError::Network(e)
        })?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            log_warn!("{method} {url} returned {status}");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);
        let rb = self.client.get(&url);
        let text = self.send("GET", &url, rb).await?;
        decode(text)
    }

    /// Make a POST request with JSON body and decode the JSON response
    pub async fn post_json<TReq, TRes>(&self, path: &str, body: &TReq) -> Result<TRes, ApiError>
    where
        TReq: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let url = self.url(path);
        let rb = self.json_post(&url, body)?;
        let text = self.send("POST", &url, rb).await?;
        decode(text)
    }

    /// Make a POST request with JSON body, ignoring whatever comes back
    pub async fn post_discard<TReq>(&self, path: &str, body: &TReq) -> Result<(), ApiError>
    where
        TReq: Serialize + ?Sized,
    {
        let url = self.url(path);
        let rb = self.json_post(&url, body)?;
        self.send("POST", &url, rb).await?;
        Ok(())
    }

    fn json_post<TReq>(&self, url: &str, body: &TReq) -> Result<RequestBuilder, ApiError>
    where
        TReq: Serialize + ?Sized,
    {
        let body_bytes = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        Ok(self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body_bytes))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// An empty body decodes as JSON `null`.
fn decode<TRes: DeserializeOwned>(text: String) -> Result<TRes, ApiError> {
    let parsed = if text.is_empty() {
        serde_json::from_str("null")
    } else {
        serde_json::from_str(&text)
    };
    parsed.map_err(|source| ApiError::Deserialize { source, body: text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path_with_one_slash() {
        let client = ApiClient::new().with_base_url("http://localhost:3002/api/posts/");
        assert_eq!(client.url("/"), "http://localhost:3002/api/posts/");
        assert_eq!(client.url("/like"), "http://localhost:3002/api/posts/like");
        assert_eq!(client.url("user/7"), "http://localhost:3002/api/posts/user/7");
    }

    #[test]
    fn absolute_paths_bypass_the_base() {
        let client = ApiClient::new().with_base_url("http://localhost:3001/api/auth");
        assert_eq!(client.url("https://other.example/x"), "https://other.example/x");
    }

    #[test]
    fn relative_without_base() {
        let client = ApiClient::new();
        assert_eq!(client.url("login"), "/login");
        assert_eq!(client.url("/login"), "/login");
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let value: Option<u32> = decode(String::new()).unwrap();
        assert_eq!(value, None);

        let err = decode::<Vec<u32>>("<html>".to_string()).unwrap_err();
        match err {
            ApiError::Deserialize { body, .. } => assert_eq!(body, "<html>"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
