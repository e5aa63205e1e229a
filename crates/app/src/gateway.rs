//! Auth gateway: mediates every identity transition.
//!
//! The gateway is the only writer of the session store. Each operation
//! opens a transition (which keeps the session in `loading`) and commits
//! its outcome; the RAII transition guarantees `loading` returns to false
//! on every exit path.

use brewpos_auth::{Identity, RouteGuard, SessionReader, SessionStore};
use brewpos_client::{ApiError, AuthApi, TokenStore};

/// Login failure surfaced to the login form.
///
/// Carries the backend's message (and HTTP status when there was one)
/// verbatim so the screen can render feedback inline; nothing is thrown
/// past the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoginFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl From<ApiError> for LoginFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth { message } => Self {
                status: Some(401),
                message,
            },
            ApiError::Validation { status, message } => Self {
                status: Some(status),
                message,
            },
            ApiError::Server { status } => Self {
                status: Some(status),
                message: "The server ran into a problem. Try again later.".to_string(),
            },
            ApiError::Network(_) => Self {
                status: None,
                message: "Cannot reach the server. Check your connection.".to_string(),
            },
            ApiError::Decode(_) => Self {
                status: None,
                message: "Unexpected response from the server.".to_string(),
            },
        }
    }
}

/// Mediates login, logout, and session restoration.
pub struct AuthGateway<A, T> {
    api: A,
    tokens: T,
    store: SessionStore,
}

impl<A: AuthApi, T: TokenStore> AuthGateway<A, T> {
    pub fn new(api: A, tokens: T) -> Self {
        Self {
            api,
            tokens,
            store: SessionStore::new(),
        }
    }

    /// Read-only session handle for the route guard and navigation shell.
    pub fn session(&self) -> SessionReader {
        self.store.reader()
    }

    /// Route guard wired to this gateway's session.
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.store.reader())
    }

    /// Re-establish the session from a previously stored credential.
    ///
    /// Quiet by design: every failure path ends in a cleared session with
    /// no user-facing error; the login screen is the only feedback. A
    /// credential the backend rejects is discarded so the next start does
    /// not retry it.
    pub async fn restore_session(&self) {
        let transition = self.store.begin();

        let token = match self.tokens.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                transition.commit(None);
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored credential");
                transition.commit(None);
                return;
            }
        };

        match self.api.restore(&token).await {
            Ok(response) => match response.user.into_identity() {
                Ok(identity) => {
                    self.api.set_credential(Some(&token));
                    if transition.commit(Some(identity)) {
                        tracing::debug!("session restored");
                    } else {
                        // Signed out while the probe was in flight.
                        self.api.set_credential(None);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "restored user failed validation");
                    self.discard_token();
                    transition.commit(None);
                }
            },
            Err(err) => {
                if err.is_auth() {
                    self.discard_token();
                }
                tracing::debug!(error = %err, "session restoration failed");
                transition.commit(None);
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On failure the session is left cleared and the failure is returned
    /// as a value for the form to display.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, LoginFailure> {
        let transition = self.store.begin();

        let response = match self.api.login(username, password).await {
            Ok(response) => response,
            Err(err) => {
                transition.commit(None);
                return Err(err.into());
            }
        };

        let identity = match response.user.into_identity() {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!(error = %err, "login response failed validation");
                transition.commit(None);
                return Err(LoginFailure {
                    status: None,
                    message: err.to_string(),
                });
            }
        };

        if let Err(err) = self.tokens.save(&response.token) {
            // The in-memory session still works; the next start will just
            // ask for a fresh login.
            tracing::warn!(error = %err, "could not persist credential");
        }
        self.api.set_credential(Some(&response.token));
        if !transition.commit(Some(identity.clone())) {
            // Signed out while the exchange was in flight; the sign-out
            // stands.
            self.discard_token();
            self.api.set_credential(None);
        }
        Ok(identity)
    }

    /// Sign out. Local-only: succeeds with the backend unreachable, and a
    /// second call is a no-op.
    pub fn logout(&self) {
        self.discard_token();
        self.api.set_credential(None);
        self.store.clear();
    }

    fn discard_token(&self) {
        if let Err(err) = self.tokens.clear() {
            tracing::warn!(error = %err, "could not remove stored credential");
        }
    }
}
