use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a portal user.
///
/// - `Voyager`: passenger; books ship services.
/// - `Admin`: maintains catalog items and registers voyagers.
/// - `Manager`: oversees entertainment, salon, fitness and hall bookings.
/// - `HeadCook`: handles catering orders.
/// - `Supervisor`: handles stationery orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Voyager,
    Admin,
    Manager,
    HeadCook,
    Supervisor,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Voyager,
        Role::Admin,
        Role::Manager,
        Role::HeadCook,
        Role::Supervisor,
    ];

    /// Parse the stored role string. Matching is exact; anything else is
    /// unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "voyager" => Some(Role::Voyager),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "headcook" => Some(Role::HeadCook),
            "supervisor" => Some(Role::Supervisor),
            _ => None,
        }
    }

    /// Lowercase string used in the persisted session record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Voyager => "voyager",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::HeadCook => "headcook",
            Role::Supervisor => "supervisor",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Voyager => "Voyager",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::HeadCook => "Head Cook",
            Role::Supervisor => "Supervisor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
