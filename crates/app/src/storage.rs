//! Single access point for the browser-persisted session contract.
//!
//! Keys: `token` (opaque credential), `userRole` (upper-case tag,
//! read case-insensitively), `userId`. Nothing else in the app touches
//! `localStorage` directly.

use shared_types::UserRole;
use web_sys::Storage;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "userRole";
const USER_ID_KEY: &str = "userId";

fn local_storage() -> Option<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn user_id() -> Option<String> {
    read(USER_ID_KEY)
}

pub fn role() -> Option<UserRole> {
    read(ROLE_KEY).as_deref().and_then(UserRole::from_tag)
}

/// Persist a freshly authenticated session. The role is written as its
/// upper-case tag.
pub fn persist(token: &str, role: UserRole, user_id: &str) {
    if let Some(store) = local_storage() {
        let _ = store.set_item(TOKEN_KEY, token);
        let _ = store.set_item(ROLE_KEY, role.storage_tag());
        let _ = store.set_item(USER_ID_KEY, user_id);
    }
}

/// Drop the persisted session, typically on logout.
pub fn clear() {
    if let Some(store) = local_storage() {
        let _ = store.remove_item(TOKEN_KEY);
        let _ = store.remove_item(ROLE_KEY);
        let _ = store.remove_item(USER_ID_KEY);
    }
}
