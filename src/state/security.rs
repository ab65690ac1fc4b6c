//! Security page state: security switches plus the active-sessions list.

use crate::data::Session;
use crate::state::list::ListCursor;
use crate::state::toggles::{security_toggles, ToggleList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityPane {
    #[default]
    Toggles,
    Sessions,
}

#[derive(Debug, Clone)]
pub struct SecurityState {
    pub toggles: ToggleList,
    pub sessions: Vec<Session>,
    pub session_cursor: ListCursor,
    pub pane: SecurityPane,
}

impl SecurityState {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            toggles: security_toggles(),
            sessions,
            session_cursor: ListCursor::new(),
            pane: SecurityPane::Toggles,
        }
    }

    pub fn switch_pane(&mut self) {
        self.pane = match self.pane {
            SecurityPane::Toggles => SecurityPane::Sessions,
            SecurityPane::Sessions => SecurityPane::Toggles,
        };
    }

    /// Revokes the highlighted session. The current session cannot be revoked.
    pub fn revoke_selected(&mut self) -> Option<Session> {
        let idx = self.session_cursor.selected;
        if self.sessions.get(idx)?.current {
            return None;
        }
        let removed = self.sessions.remove(idx);
        self.session_cursor.clamp(self.sessions.len());
        tracing::info!(device = %removed.device, "session revoked");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FakeStore;

    #[test]
    fn test_current_session_cannot_be_revoked() {
        let mut s = SecurityState::new(FakeStore::new().sessions);
        assert!(s.sessions[0].current);
        assert!(s.revoke_selected().is_none());
        assert_eq!(s.sessions.len(), 3);
    }

    #[test]
    fn test_revoke_other_session() {
        let mut s = SecurityState::new(FakeStore::new().sessions);
        s.session_cursor.navigate_down(s.sessions.len());
        s.session_cursor.navigate_down(s.sessions.len());
        let removed = s.revoke_selected().unwrap();
        assert_eq!(removed.device, "Windows PC · Edge");
        assert_eq!(s.sessions.len(), 2);
        assert_eq!(s.session_cursor.selected, 1);
    }

    #[test]
    fn test_switch_pane() {
        let mut s = SecurityState::new(Vec::new());
        s.switch_pane();
        assert_eq!(s.pane, SecurityPane::Sessions);
        s.switch_pane();
        assert_eq!(s.pane, SecurityPane::Toggles);
    }
}
