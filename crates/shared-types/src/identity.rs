use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated user's role-bearing profile.
///
/// `role` keeps the raw stored string so a record carrying a role this build
/// does not know about still loads; `role()` tells the two apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.as_str().to_string(),
        }
    }

    /// Recognized role, or `None` for an unknown role string.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Role label for the side menu; unknown roles show their raw value.
    pub fn role_label(&self) -> &str {
        match self.role() {
            Some(role) => role.display_name(),
            None => &self.role,
        }
    }

    /// Up to two uppercase initials of the name, for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// One entry of the mock identity source.
///
/// Plain-text passwords: this list stands in for an identity provider and is
/// not a security boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub identity: Identity,
}

/// Fixed list of credentials that `login` is checked against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CredentialDirectory {
    credentials: Vec<Credential>,
}

impl CredentialDirectory {
    /// The five demo accounts, one per role.
    pub fn demo() -> Self {
        const PASSWORD: &str = "password123";
        let accounts = [
            ("1", "John Voyager", "voyager@cruise.com", Role::Voyager),
            ("2", "Admin User", "admin@cruise.com", Role::Admin),
            ("3", "Manager User", "manager@cruise.com", Role::Manager),
            ("4", "Head Cook", "cook@cruise.com", Role::HeadCook),
            ("5", "Supervisor", "supervisor@cruise.com", Role::Supervisor),
        ];
        let credentials = accounts
            .into_iter()
            .map(|(id, name, email, role)| Credential {
                email: email.to_string(),
                password: PASSWORD.to_string(),
                identity: Identity::new(id, name, email, role),
            })
            .collect();
        Self { credentials }
    }

    /// Exact match on both email and password.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<Identity> {
        self.credentials
            .iter()
            .find(|c| c.email == email && c.password == password)
            .map(|c| c.identity.clone())
    }

    /// Role, email and password of every account, for the login screen hint.
    pub fn demo_accounts(&self) -> Vec<(String, &str, &str)> {
        self.credentials
            .iter()
            .map(|c| {
                (
                    c.identity.role_label().to_string(),
                    c.email.as_str(),
                    c.password.as_str(),
                )
            })
            .collect()
    }
}
