//! # Auth Session Store
//!
//! The session is two persisted values: a bearer token string and a
//! serialized [`UserProfile`]. Persistence goes through the
//! [`SessionStorage`] port so the store tests without a browser; the web
//! client plugs in localStorage.
//!
//! Both values are written at successful login/registration and cleared at
//! logout or on any 401 from the API.

use shared::dto::auth::{Role, UserProfile};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "agrisense_token";
/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "agrisense_user";

/// Key-value persistence port.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Session holder over an injected storage backend.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a fresh session.
    pub fn login(&self, token: &str, user: &UserProfile) {
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            // A token without a profile is useless; drop both.
            Err(_) => self.storage.remove(TOKEN_KEY),
        }
    }

    /// Clear both persisted values. Also the 401 handler.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// The persisted profile; a corrupt stored value reads as logged-out.
    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = self.storage.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some() && self.current_user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.current_user(), Some(user) if user.role == Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::kyc::KycStatus;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for localStorage.
    #[derive(Default)]
    struct MemoryStorage {
        map: RefCell<HashMap<String, String>>,
    }

    impl SessionStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) {
            self.map.borrow_mut().insert(key.into(), value.into());
        }
        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }

    fn farmer() -> UserProfile {
        UserProfile {
            id: "42".into(),
            name: "Asha".into(),
            mobile: "9876543210".into(),
            email: None,
            role: Role::Farmer,
            kyc_status: KycStatus::Pending,
            created_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn login_persists_token_and_profile() {
        let store = SessionStore::new(MemoryStorage::default());
        assert!(!store.is_logged_in());

        store.login("tok-123", &farmer());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(store.current_user().unwrap().name, "Asha");
        assert!(store.is_logged_in());
        assert!(!store.is_admin());
    }

    #[test]
    fn logout_clears_both_keys() {
        let store = SessionStore::new(MemoryStorage::default());
        store.login("tok-123", &farmer());
        store.logout();
        assert!(store.token().is_none());
        assert!(store.current_user().is_none());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn corrupt_profile_reads_as_logged_out() {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "tok-123");
        storage.set(USER_KEY, "{not json");
        let store = SessionStore::new(storage);
        assert!(store.current_user().is_none());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn admin_role_gates_is_admin() {
        let store = SessionStore::new(MemoryStorage::default());
        let mut user = farmer();
        user.role = Role::Admin;
        store.login("tok-9", &user);
        assert!(store.is_admin());
    }
}
