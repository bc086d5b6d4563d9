use crate::{SessionError, SessionResult, TokenStore};

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use log::warn;

#[derive(Debug, Clone)]
enum CachedToken {
    Unloaded,
    Loaded(Option<String>),
}

struct Inner {
    store: Box<dyn TokenStore>,
    cached: RwLock<CachedToken>,
}

/// Shared handle to the session token.
///
/// Clones share the same store and cache. The store is read once, on the
/// first `get_token`, and written through on every set/clear.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<Inner>,
}

impl SessionContext {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: Box::new(store),
                cached: RwLock::new(CachedToken::Unloaded),
            }),
        }
    }

    /// Current token, `None` when signed out.
    ///
    /// A store that cannot be read (missing permissions, corrupted file)
    /// counts as signed out.
    pub fn get_token(&self) -> Option<String> {
        if let CachedToken::Loaded(ref token) = *self
            .inner
            .cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
        {
            return token.clone();
        }

        let token = match self.inner.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Treating unreadable session as signed out: {e}");
                None
            }
        };

        *self
            .inner
            .cached
            .write()
            .unwrap_or_else(PoisonError::into_inner) = CachedToken::Loaded(token.clone());
        token
    }

    pub fn has_token(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn set_token(&self, token: &str) -> SessionResult<()> {
        if token.trim().is_empty() {
            return Err(SessionError::empty_token());
        }

        self.inner.store.save(token)?;
        *self
            .inner
            .cached
            .write()
            .unwrap_or_else(PoisonError::into_inner) = CachedToken::Loaded(Some(token.to_string()));
        Ok(())
    }

    pub fn clear_token(&self) -> SessionResult<()> {
        self.inner.store.clear()?;
        *self
            .inner
            .cached
            .write()
            .unwrap_or_else(PoisonError::into_inner) = CachedToken::Loaded(None);
        Ok(())
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("signed_in", &self.has_token())
            .finish()
    }
}
