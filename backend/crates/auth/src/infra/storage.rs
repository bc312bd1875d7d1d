//! Session Token Storage
//!
//! [`SessionStore`] on top of any [`KeyValueStorage`].

use platform::storage::KeyValueStorage;

use crate::application::config::DEFAULT_TOKEN_STORAGE_KEY;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Token persisted under a single storage key
#[derive(Debug)]
pub struct StorageSessionStore<B> {
    backend: B,
    key: String,
}

impl<B> StorageSessionStore<B>
where
    B: KeyValueStorage,
{
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Store under [`DEFAULT_TOKEN_STORAGE_KEY`]
    pub fn with_default_key(backend: B) -> Self {
        Self::new(backend, DEFAULT_TOKEN_STORAGE_KEY)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<B> SessionStore for StorageSessionStore<B>
where
    B: KeyValueStorage,
{
    fn save(&self, token: &SessionToken) -> AuthResult<()> {
        self.backend.set(&self.key, token.expose())?;
        tracing::debug!(key = %self.key, token = %token.fingerprint(), "Session token stored");
        Ok(())
    }

    fn read(&self) -> Option<SessionToken> {
        let raw = match self.backend.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Session token unreadable");
                return None;
            }
        };
        SessionToken::new(raw).ok()
    }

    fn clear(&self) {
        if let Err(e) = self.backend.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "Failed to clear session token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::storage::{FileStorage, MemoryStorage};

    fn token(raw: &str) -> SessionToken {
        SessionToken::new(raw).unwrap()
    }

    #[test]
    fn test_save_read_clear() {
        let store = StorageSessionStore::with_default_key(MemoryStorage::new());
        assert!(store.read().is_none());

        store.save(&token("abc.def.ghi")).unwrap();
        assert_eq!(store.read(), Some(token("abc.def.ghi")));
        assert_eq!(
            store.backend().get("token").unwrap().as_deref(),
            Some("abc.def.ghi")
        );

        store.clear();
        assert!(store.read().is_none());
        store.clear();
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_save_replaces_previous_token() {
        let store = StorageSessionStore::new(MemoryStorage::new(), "session");
        store.save(&token("first")).unwrap();
        store.save(&token("second")).unwrap();
        assert_eq!(store.read(), Some(token("second")));
        assert_eq!(store.backend().len(), 1);
    }

    #[test]
    fn test_blank_value_reads_as_missing() {
        let backend = MemoryStorage::new();
        backend.set("token", "   ").unwrap();
        let store = StorageSessionStore::with_default_key(backend);
        assert!(store.read().is_none());
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = StorageSessionStore::with_default_key(FileStorage::new(&path));
        store.save(&token("persisted")).unwrap();
        drop(store);

        let reopened = StorageSessionStore::with_default_key(FileStorage::new(&path));
        assert_eq!(reopened.read(), Some(token("persisted")));

        reopened.clear();
        let again = StorageSessionStore::with_default_key(FileStorage::new(&path));
        assert!(again.read().is_none());
    }

    #[test]
    fn test_corrupt_file_reads_as_missing_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = StorageSessionStore::with_default_key(FileStorage::new(&path));
        assert!(store.read().is_none());

        store.clear();
        store.save(&token("fresh")).unwrap();
        assert_eq!(store.read(), Some(token("fresh")));
    }
}
