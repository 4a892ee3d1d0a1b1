//! Client configuration: where the two remote services live.

/// Fallback base URL of the auth service.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:3001/api/auth";
/// Fallback base URL of the posts service.
pub const DEFAULT_POSTS_URL: &str = "http://localhost:3002/api/posts";

pub const AUTH_URL_VAR: &str = "REDSOCIAL_AUTH_URL";
pub const POSTS_URL_VAR: &str = "REDSOCIAL_POSTS_URL";

/// Base URLs of the remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Auth service base, e.g. `http://localhost:3001/api/auth`.
    pub auth_url: String,
    /// Posts service base, e.g. `http://localhost:3002/api/posts`.
    pub posts_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            posts_url: DEFAULT_POSTS_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(auth_url: impl Into<String>, posts_url: impl Into<String>) -> Self {
        Self {
            auth_url: auth_url.into(),
            posts_url: posts_url.into(),
        }
    }

    /// Build the configuration from the environment.
    ///
    /// Environment variables:
    /// - `REDSOCIAL_AUTH_URL`: auth service base (default: `http://localhost:3001/api/auth`)
    /// - `REDSOCIAL_POSTS_URL`: posts service base (default: `http://localhost:3002/api/posts`)
    ///
    /// Native builds read the process environment and fall back to the value
    /// baked in at compile time. Web builds only have the compile-time value.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| {
            #[cfg(not(target_arch = "wasm32"))]
            {
                if let Ok(value) = std::env::var(var) {
                    return Some(value);
                }
            }
            match var {
                AUTH_URL_VAR => option_env!("REDSOCIAL_AUTH_URL").map(str::to_string),
                POSTS_URL_VAR => option_env!("REDSOCIAL_POSTS_URL").map(str::to_string),
                _ => None,
            }
        })
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank values fall back to the localhost defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |var: &str, default: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            auth_url: read(AUTH_URL_VAR, DEFAULT_AUTH_URL),
            posts_url: read(POSTS_URL_VAR, DEFAULT_POSTS_URL),
        }
    }
}
