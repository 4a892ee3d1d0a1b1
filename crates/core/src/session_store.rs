//! Authenticated session state with persistent storage mirroring.
//!
//! The store owns the in-memory `{ token, user }` pair. Storage is a mirror
//! written on every mutation and read once when the store is loaded; the
//! in-memory value is authoritative for the running process.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use redsocial_shared::User;

use crate::storage::{MemoryStorage, Storage};
use crate::{log_debug, log_warn};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// The current authenticated identity, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// Whether a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

type Listener = Arc<dyn Fn(&Session, &Session) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Handle returned by [`SessionStore::subscribe`].
///
/// Dropping it leaves the listener registered; call [`Subscription::unsubscribe`].
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Deregister the listener. Takes effect from the next state transition.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let mut listeners = listeners.lock().unwrap_or_else(PoisonError::into_inner);
            listeners.entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Single writer path for the session: [`set_auth`](Self::set_auth) and
/// [`clear_auth`](Self::clear_auth).
///
/// Listeners run synchronously after each transition, in registration order,
/// with no lock held. A listener may read or mutate the store; a nested
/// transition notifies everyone before the outer round resumes, and the outer
/// round keeps delivering the transition it started with.
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn Storage>,
    listeners: Arc<Mutex<Listeners>>,
}

impl SessionStore {
    /// Rehydrate the session from `storage`.
    ///
    /// Unreadable entries are treated as absent.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let token = match storage.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                log_warn!("failed to read stored token: {e}");
                None
            }
        };

        let user = match storage.get_item(USER_KEY) {
            Ok(Some(raw)) => parse_user(&raw),
            Ok(None) => None,
            Err(e) => {
                log_warn!("failed to read stored user: {e}");
                None
            }
        };

        Self::with_session(storage, Session { token, user })
    }

    /// A store backed by process memory only.
    pub fn ephemeral() -> Self {
        Self::with_session(Arc::new(MemoryStorage::new()), Session::default())
    }

    fn with_session(storage: Arc<dyn Storage>, session: Session) -> Self {
        Self {
            state: RwLock::new(session),
            storage,
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    /// Snapshot of the current session.
    pub fn state(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Replace the session with `token` and `user`, persist both, notify.
    pub fn set_auth(&self, token: impl Into<String>, user: User) {
        let token = token.into();
        let next = Session {
            token: Some(token.clone()),
            user: Some(user.clone()),
        };
        let previous = self.replace(next.clone());

        self.persist(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(json) => self.persist(USER_KEY, &json),
            Err(e) => log_warn!("failed to encode user for storage: {e}"),
        }

        log_debug!("session set for user {}", user.id);
        self.notify(&next, &previous);
    }

    /// Empty the session, delete both persisted keys, notify.
    pub fn clear_auth(&self) {
        let next = Session::default();
        let previous = self.replace(next.clone());

        self.forget(TOKEN_KEY);
        self.forget(USER_KEY);

        log_debug!("session cleared");
        self.notify(&next, &previous);
    }

    /// Register `listener`, called with `(new, previous)` after every transition.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Session, &Session) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    fn replace(&self, next: Session) -> Session {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *state, next)
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log_warn!("failed to persist {key}: {e}");
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log_warn!("failed to remove persisted {key}: {e}");
        }
    }

    fn notify(&self, next: &Session, previous: &Session) {
        let snapshot: Vec<Listener> = {
            let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            listeners.entries.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        for listener in snapshot {
            listener(next, previous);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len();
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("listeners", &listeners)
            .finish_non_exhaustive()
    }
}

/// `null` and unparsable records both mean "no user".
fn parse_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<Option<User>>(raw) {
        Ok(user) => user,
        Err(e) => {
            log_warn!("ignoring unreadable stored user: {e}");
            None
        }
    }
}
