//! Redsocial core: session state and the clients for the auth and posts
//! services. Platform-neutral; the Dioxus front end lives in
//! `redsocial-client`.

pub mod logging;

pub mod api;
pub mod api_client;
pub mod config;
pub mod error;
pub mod session_store;
pub mod storage;

pub use api::{Api, AuthApi, PostsApi};
pub use api_client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, StorageError};
pub use session_store::{Session, SessionStore, Subscription};
pub use storage::{default_storage, MemoryStorage, Storage};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
