//! Posts service: feed, likes, new posts, per-user posts.

use std::sync::Arc;

use redsocial_shared::{LikeRequest, LikeResponse, Post, PostFormData};

use crate::api_client::ApiClient;
use crate::error::ApiError;
use crate::session_store::SessionStore;

/// Client for the posts service, authorized by the current session token.
#[derive(Debug, Clone)]
pub struct PostsApi {
    client: ApiClient,
}

impl PostsApi {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self::from_client(
            ApiClient::new()
                .with_base_url(base_url)
                .with_bearer(session),
        )
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET {base}/`, in the order the service returns them.
    pub async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.client.get_json("/").await
    }

    /// `POST {base}/like` with `{"postId": ...}`.
    pub async fn like_post(&self, post_id: &str) -> Result<LikeResponse, ApiError> {
        let body = LikeRequest {
            post_id: post_id.to_string(),
        };
        self.client.post_json("/like", &body).await
    }

    /// `POST {base}/` with `{"message": ...}`.
    pub async fn create_post(&self, data: &PostFormData) -> Result<Post, ApiError> {
        self.client.post_json("/", data).await
    }

    /// `GET {base}/user/{user_id}`.
    pub async fn get_user_posts(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        let path = format!("/user/{}", urlencoding::encode(user_id));
        self.client.get_json(&path).await
    }
}
