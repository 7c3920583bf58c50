use leptos::prelude::*;

use super::storage;

#[derive(Debug, Clone)]
enum TokenSource {
    /// Read localStorage on every request; the token value is never cached.
    BrowserStorage,
    /// Fixed value, for tests.
    Fixed(Option<String>),
}

/// Authenticated session threaded through components via context.
///
/// Components never read ambient storage directly; they ask the session for
/// the current bearer token instead, which keeps API calls mockable.
#[derive(Debug, Clone)]
pub struct Session {
    source: TokenSource,
}

impl Session {
    pub fn from_browser_storage() -> Self {
        Self {
            source: TokenSource::BrowserStorage,
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            source: TokenSource::Fixed(Some(token.into())),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            source: TokenSource::Fixed(None),
        }
    }

    /// Current bearer token, if any.
    pub fn bearer_token(&self) -> Option<String> {
        match &self.source {
            TokenSource::BrowserStorage => storage::get_token(),
            TokenSource::Fixed(token) => token.clone(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.bearer_token().unwrap_or_default())
    }
}

/// Hook to access the session provided by the app root
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in context")
}
