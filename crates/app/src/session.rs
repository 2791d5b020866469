use dioxus::prelude::*;
use shared_types::UserRole;

use crate::storage;

/// Process-wide session context. The only owner of auth state; features
/// read it through [`use_session`] instead of hitting browser storage.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub token: Signal<Option<String>>,
    pub role: Signal<Option<UserRole>>,
    pub user_id: Signal<Option<String>>,
    /// False until the initial storage read has completed. Guards render
    /// nothing before that to avoid a flash of redirected content.
    pub ready: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: Signal::new(None),
            role: Signal::new(None),
            user_id: Signal::new(None),
            ready: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Hydrate from persistent storage. Called once at application start.
    pub fn restore(&mut self) {
        self.token.set(storage::token());
        self.role.set(storage::role());
        self.user_id.set(storage::user_id());
        self.ready.set(true);
    }

    pub fn sign_in(&mut self, token: String, role: UserRole, user_id: String) {
        storage::persist(&token, role, &user_id);
        self.token.set(Some(token));
        self.role.set(Some(role));
        self.user_id.set(Some(user_id));
        self.ready.set(true);
    }

    pub fn sign_out(&mut self) {
        storage::clear();
        self.token.set(None);
        self.role.set(None);
        self.user_id.set(None);
    }
}

/// Hook to access the shared session context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
