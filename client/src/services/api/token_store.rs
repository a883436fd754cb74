//! # Token Store
//!
//! Injectable storage for the access/refresh token pair.
//!
//! The interceptor only talks to the [`TokenStore`] trait, so tests (or a
//! platform keychain) can substitute their own implementation.
//! [`MemoryTokenStore`] is the default: a `parking_lot::RwLock` held for the
//! duration of a single read or write, never across an `.await`.

use parking_lot::RwLock;

/// Access/refresh token pair.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

// Tokens must never end up in logs
impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Storage for the current session's tokens.
pub trait TokenStore: Send + Sync {
    /// Current access token, if signed in.
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if signed in.
    fn refresh_token(&self) -> Option<String>;

    /// Replace both tokens (login).
    fn set_tokens(&self, tokens: TokenPair);

    /// Replace the access token and, when rotated, the refresh token.
    ///
    /// Returns `false` without storing anything when there is no session to
    /// update.
    fn update_access_token(&self, access_token: String, rotated_refresh: Option<String>) -> bool;

    /// Forget both tokens (logout, failed refresh).
    fn clear(&self);
}

/// In-memory [`TokenStore`].
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `tokens`, e.g. restored from disk.
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.refresh_token.clone())
    }

    fn set_tokens(&self, tokens: TokenPair) {
        *self.tokens.write() = Some(tokens);
    }

    fn update_access_token(&self, access_token: String, rotated_refresh: Option<String>) -> bool {
        // A session cleared while the refresh was in flight (logout) stays cleared
        let mut guard = self.tokens.write();
        let Some(tokens) = guard.as_mut() else {
            return false;
        };
        tokens.access_token = access_token;
        if let Some(refresh_token) = rotated_refresh {
            tokens.refresh_token = refresh_token;
        }
        true
    }

    fn clear(&self) {
        *self.tokens.write() = None;
    }
}
