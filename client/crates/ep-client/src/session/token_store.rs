use crate::SessionResult;

/// Durable storage for a single opaque session token.
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, `None` when nothing is stored.
    fn load(&self) -> SessionResult<Option<String>>;

    fn save(&self, token: &str) -> SessionResult<()>;

    /// Removing an absent token is not an error.
    fn clear(&self) -> SessionResult<()>;
}
