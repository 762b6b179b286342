//! Reactive session state over the persisted auth session.
//!
//! [`lib_farm::session::SessionStore`] owns persistence through its storage
//! port; this module plugs in browser localStorage and mirrors the current
//! user into a signal so the navbar and the admin gate react to
//! login/logout without a reload.

use leptos::prelude::*;
use lib_farm::session::{SessionStorage, SessionStore};
use shared::dto::auth::UserProfile;

/// Browser localStorage implementation of the storage port.
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            storage.set_item(key, value).ok();
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            storage.remove_item(key).ok();
        }
    }
}

/// The persisted session store. Stateless to construct, so anything
/// (including the API layer's 401 handler) can reach it.
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}

/// Global session context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: RwSignal<Option<UserProfile>>,
}

impl SessionContext {
    fn new() -> Self {
        // Hydrate from whatever the last page load persisted.
        Self {
            user: RwSignal::new(session_store().current_user()),
        }
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.user.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .with(|u| matches!(u, Some(user) if user.role == shared::dto::auth::Role::Admin))
    }

    /// Persist and publish a fresh session.
    pub fn login(&self, token: &str, user: UserProfile) {
        session_store().login(token, &user);
        self.user.set(Some(user));
    }

    /// Refresh the published profile (e.g. after a profile update).
    pub fn refresh_user(&self, user: UserProfile) {
        session_store().login(
            &session_store().token().unwrap_or_default(),
            &user,
        );
        self.user.set(Some(user));
    }

    pub fn logout(&self) {
        session_store().logout();
        self.user.set(None);
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
