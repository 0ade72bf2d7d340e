use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Authentication state owned by a single bookmaker client.
///
/// A session starts unauthenticated and only moves forward; there is no logout.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    authenticated_at: Option<DateTime<Utc>>,
    authenticate_count: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated)
    }

    /// Records a successful authentication.
    pub fn mark_authenticated(&mut self) {
        self.state = SessionState::Authenticated;
        self.authenticated_at = Some(Utc::now());
        self.authenticate_count += 1;
    }

    pub fn authenticated_at(&self) -> Option<DateTime<Utc>> {
        self.authenticated_at
    }

    /// Number of successful authentications over the session's lifetime.
    pub fn authenticate_count(&self) -> u32 {
        self.authenticate_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert!(!session.is_authenticated());
        assert!(session.authenticated_at().is_none());
        assert_eq!(session.authenticate_count(), 0);
    }

    #[test]
    fn test_mark_authenticated() {
        let mut session = Session::new();
        session.mark_authenticated();

        assert_eq!(session.state(), SessionState::Authenticated);
        assert!(session.is_authenticated());
        assert!(session.authenticated_at().is_some());
        assert_eq!(session.authenticate_count(), 1);

        session.mark_authenticated();
        assert!(session.is_authenticated());
        assert_eq!(session.authenticate_count(), 2);
    }
}
