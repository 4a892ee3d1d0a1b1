//! Clients for the two remote services.

pub mod auth;
pub mod posts;

use std::sync::Arc;

use reqwest::Client;

pub use auth::AuthApi;
pub use posts::PostsApi;

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::session_store::SessionStore;

/// Both service clients, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct Api {
    pub auth: AuthApi,
    pub posts: PostsApi,
}

impl Api {
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Self {
        let client = Client::new();
        Self {
            auth: AuthApi::from_client(
                ApiClient::new()
                    .with_client(client.clone())
                    .with_base_url(config.auth_url.clone()),
            ),
            posts: PostsApi::from_client(
                ApiClient::new()
                    .with_client(client)
                    .with_base_url(config.posts_url.clone())
                    .with_bearer(session),
            ),
        }
    }
}
