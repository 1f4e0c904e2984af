//! The signed-in shopper, held explicitly by whoever needs it.

use crate::model::LoginResponse;
use tracing::info;

/// One login: the bearer token and what the backend said about the account.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub balance: f64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

impl From<LoginResponse> for Session {
    fn from(login: LoginResponse) -> Self {
        Self {
            token: login.token,
            username: login.username,
            balance: login.balance,
        }
    }
}

/// Holds the current [`Session`], if any.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session, replacing any previous one.
    pub fn begin(&mut self, session: Session) {
        info!(username = %session.username, "Session started");
        self.current = Some(session);
    }

    /// Ends the session and returns it.
    pub fn end(&mut self) -> Option<Session> {
        let ended = self.current.take();
        if let Some(session) = &ended {
            info!(username = %session.username, "Session ended");
        }
        ended
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.username.as_str())
    }

    pub fn balance(&self) -> Option<f64> {
        self.current.as_ref().map(|s| s.balance)
    }

    /// Records a new wallet balance; a no-op when logged out.
    pub fn set_balance(&mut self, balance: f64) {
        if let Some(session) = self.current.as_mut() {
            session.balance = balance;
        }
    }
}
