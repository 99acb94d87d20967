use log::info;

use crate::models::{Role, Session};
use crate::store::{self, RecordStore};

/// Top-level application state. `Loading` exists only before startup routing
/// and is never re-entered.
#[derive(Clone, Debug, PartialEq)]
pub enum AppState {
    Loading,
    Unauthenticated,
    Student(Session),
    Teacher(Session),
}

impl AppState {
    /// One-shot startup routing: restore the persisted session and route by
    /// role. No session — or one whose role did not parse — lands on
    /// `Unauthenticated` as the defensive default.
    pub fn startup(store: &dyn RecordStore) -> AppState {
        match store::load_session(store) {
            Some(session) => {
                info!("Restored session for {}", session.email);
                AppState::signed_in(session)
            }
            None => AppState::Unauthenticated,
        }
    }

    /// Transition on a successful login or register.
    pub fn signed_in(session: Session) -> AppState {
        match session.role {
            Role::Student => AppState::Student(session),
            Role::Teacher => AppState::Teacher(session),
        }
    }

    /// Transition on logout, from any authenticated state.
    pub fn signed_out() -> AppState {
        AppState::Unauthenticated
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AppState::Student(s) | AppState::Teacher(s) => Some(s),
            _ => None,
        }
    }
}
