//! Auth service: login and registration.

use redsocial_shared::{Credentials, LoginResponse, RegisterData};

use crate::api_client::ApiClient;
use crate::error::ApiError;

/// Client for the auth service. Requests carry no bearer token.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_client(ApiClient::new().with_base_url(base_url))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST {base}/login` with the credentials as body.
    ///
    /// The response body is returned as the service sent it.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.client.post_json("/login", credentials).await
    }

    /// `POST {base}/register` with the full registration data as body.
    pub async fn register(&self, data: &RegisterData) -> Result<(), ApiError> {
        self.client.post_discard("/register", data).await
    }
}
