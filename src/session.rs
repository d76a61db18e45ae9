use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use time::OffsetDateTime;

use crate::token::{decode_claims, normalize_role};

type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Consumer-provided persistence for the session token.
///
/// One opaque string under one slot — the client-side equivalent of a single
/// `localStorage` key. The token is overwritten on each login and cleared on
/// logout or on an authorization-failure response.
///
/// Implementations must be usable from `&self`; [`MemoryTokenStore`] and
/// [`FileTokenStore`] are provided.
pub trait TokenStore: Send + Sync + 'static {
    /// Read the current token, if any.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist a token, replacing any previous one.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory token store, mainly for tests and short-lived tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(lock(&self.token).clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *lock(&self.token) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *lock(&self.token) = None;
        Ok(())
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match m.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// File-backed token store: the whole file is the token.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Session handle: the stored token plus everything derived from it.
///
/// Cheaply cloneable; clones share the same store. Roles and expiry are
/// recomputed from the stored token on every call, never cached, so a token
/// written by one component is immediately visible to all others.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The raw stored token, if any. Store failures degrade to `None`.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Token store read failed; treating as logged out");
                None
            }
        }
    }

    /// Persist a freshly issued token, replacing any previous session.
    pub fn save_token(&self, token: &str) {
        if let Err(e) = self.store.save(token) {
            tracing::error!(error = %e, "Token store write failed; session will not survive");
        }
    }

    /// Drop the stored token (logout, or forced by a 401/403 response).
    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Token store clear failed");
        }
    }

    /// Whether a usable session exists.
    ///
    /// False if no token is stored. If the claims carry an `exp` that is at or
    /// before the current time, the token is cleared as a side effect and this
    /// returns false. A token without `exp` — including one whose payload does
    /// not decode at all — never expires.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        let exp = decode_claims(&token).and_then(|c| c.exp);
        if let Some(exp) = exp {
            let now = OffsetDateTime::now_utc().unix_timestamp();
            if exp <= now {
                self.clear();
                return false;
            }
        }
        true
    }

    /// Normalized role names from the token claims; empty when there is no
    /// token or no decodable payload.
    #[must_use]
    pub fn roles(&self) -> Vec<String> {
        self.token()
            .and_then(|t| decode_claims(&t))
            .map(|c| c.normalized_roles())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles().contains(&normalize_role(role))
    }

    /// True iff at least one of `roles` (after normalization) is held.
    #[must_use]
    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        let have = self.roles();
        roles
            .iter()
            .any(|r| have.contains(&normalize_role(r.as_ref())))
    }
}
