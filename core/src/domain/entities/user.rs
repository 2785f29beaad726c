//! User entity representing a registered member of the sharing service.

use serde::{Deserialize, Serialize};

use super::{Id, UNSAVED_ID};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier
    pub id: Id,

    /// Display name, never blank
    pub name: String,

    /// Email address, unique across users
    pub email: String,
}

/// Partial update of a user profile; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Creates an unsaved user. A blank name falls back to the email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        let name = name.into();
        let name = if name.trim().is_empty() { email.clone() } else { name };

        Self {
            id: UNSAVED_ID,
            name,
            email,
        }
    }

    /// Whether this user has been written to storage
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Replaces the display name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the email. When the name is blank afterwards it is reset to
    /// the new email.
    pub fn change_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        if self.name.trim().is_empty() {
            self.name = self.email.clone();
        }
    }

    /// Checks whether `email` differs from the current address
    pub fn email_differs(&self, email: &str) -> bool {
        self.email != email
    }
}
