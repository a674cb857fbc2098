//! The process-wide credential slot. Injectable so call sites can run
//! against an in-memory store under test.

const TOKEN_KEY: &str = "token";

pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Bearer token persisted in browser localStorage. Written on login, cleared
/// on logout, read before every authenticated call. Every accessor degrades
/// to a no-op when storage is unavailable.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }

    fn clear(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

#[cfg(test)]
pub struct MemoryTokenStore(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl MemoryTokenStore {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(None))
    }

    pub fn with_token(token: &str) -> Self {
        Self(std::cell::RefCell::new(Some(token.into())))
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.into());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".into()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn seeded_store_reports_token() {
        let store = MemoryTokenStore::with_token("tok");
        assert_eq!(store.get(), Some("tok".into()));
    }
}
