//! Session context for the component tree.
//!
//! Wraps the [`SessionStore`] in a reactive signal so views re-render when
//! the user logs in or out, and hands out the service clients.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use futures_channel::mpsc;
use futures_util::StreamExt;
use redsocial_core::{default_storage, Api, ClientConfig, Session, SessionStore, Subscription};
use redsocial_shared::User;

/// Authentication context provided to the app
#[derive(Clone)]
pub struct AuthContext {
    pub session: Signal<Session>,
    store: Arc<SessionStore>,
    api: Api,
}

/// Provider component that sets up auth context
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let store = use_hook(|| Arc::new(SessionStore::load(default_storage())));
    let api = use_hook({
        let store = store.clone();
        move || Api::new(&ClientConfig::from_env(), store)
    });
    let session = use_signal({
        let store = store.clone();
        move || store.state()
    });

    // Follow store transitions made outside this context
    let subscription = use_hook({
        let store = store.clone();
        move || {
            let (tx, mut rx) = mpsc::unbounded::<Session>();
            let subscription = store.subscribe(move |next, _| {
                let _ = tx.unbounded_send(next.clone());
            });

            let mut session = session;
            spawn(async move {
                while let Some(next) = rx.next().await {
                    if *session.peek() != next {
                        session.set(next);
                    }
                }
            });

            Rc::new(RefCell::new(Some(subscription)))
        }
    });

    use_drop(move || {
        if let Some(subscription) = subscription.borrow_mut().take() {
            Subscription::unsubscribe(subscription);
        }
    });

    use_context_provider(|| AuthContext {
        session,
        store,
        api,
    });

    children
}

impl AuthContext {
    /// Store a fresh login and publish it to the tree.
    pub fn set_auth(&mut self, token: impl Into<String>, user: User) {
        self.store.set_auth(token, user);
        self.session.set(self.store.state());
    }

    /// Logout and clear session
    pub fn clear_auth(&mut self) {
        self.store.clear_auth();
        self.session.set(self.store.state());
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user.clone()
    }

    /// Clients for the auth and posts services
    pub fn api(&self) -> &Api {
        &self.api
    }
}
