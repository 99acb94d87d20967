use chrono::Utc;
use log::{debug, info, warn};

use crate::error::PortalError;
use crate::models::{Role, Session, User};
use crate::store::{self, RecordStore, USERS};

pub struct AuthService<'a> {
    pub store: &'a mut dyn RecordStore,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    /// Logs in with an exact, case-sensitive email and password match.
    ///
    /// A miss is always [`PortalError::InvalidCredentials`]: an unknown email
    /// and a wrong password are indistinguishable to the caller.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, PortalError> {
        info!("Login attempt for email: {}", email);
        let users: Vec<User> = store::load_collection(self.store, USERS);

        let found = users
            .iter()
            .find(|u| u.email == email && u.password == password);

        match found {
            Some(user) => {
                let session = Session::from(user);
                store::save_session(self.store, &session)?;
                debug!("User {} logged in", session.id);
                Ok(session)
            }
            None => {
                warn!("Login rejected for email: {}", email);
                Err(PortalError::InvalidCredentials)
            }
        }
    }

    /// Registers a new account and logs it in immediately.
    ///
    /// Ids derive from the creation timestamp; the role-specific id gets a
    /// `STU`/`TEA` prefix. A duplicate email leaves the users collection
    /// untouched.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<Session, PortalError> {
        info!("Registering {} account for email: {}", role, email);
        let mut users: Vec<User> = store::load_collection(self.store, USERS);

        if users.iter().any(|u| u.email == email) {
            warn!("Registration rejected, email already taken: {}", email);
            return Err(PortalError::DuplicateEmail(email.to_string()));
        }

        let now_ms = Utc::now().timestamp_millis();
        let user = User {
            id: now_ms.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role,
            student_id: (role == Role::Student).then(|| format!("STU{}", now_ms)),
            teacher_id: (role == Role::Teacher).then(|| format!("TEA{}", now_ms)),
        };

        users.push(user.clone());
        store::save_collection(self.store, USERS, &users)?;
        debug!("User created with ID: {}", user.id);

        // Auto-login: the fresh account becomes the current session.
        let session = Session::from(&user);
        store::save_session(self.store, &session)?;

        Ok(session)
    }

    /// Clears the session only; users, grades and schedule stay untouched.
    pub fn logout(&mut self) -> Result<(), PortalError> {
        info!("Logging out current session");
        store::clear_session(self.store)
    }

    /// Reads the persisted session verbatim, without re-validating it against
    /// the users collection. A stale or tampered session is trusted as-is;
    /// unparseable content yields `None`.
    pub fn restore_session(&self) -> Option<Session> {
        store::load_session(&*self.store)
    }
}
