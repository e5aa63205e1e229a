use core::str::FromStr;

use serde::{Deserialize, Serialize};

use brewpos_core::DomainError;

/// Role held by an authenticated user.
///
/// The set is deliberately closed: route policy is a total function over
/// `Role`, so a role string the frontend does not know is rejected when the
/// identity is built instead of falling through a string comparison at
/// navigation time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Cashier];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cashier => "cashier",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "cashier" => Ok(Role::Cashier),
            other => Err(DomainError::unknown_role(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("admin".parse::<Role>().expect("admin"), Role::Admin);
        assert_eq!("cashier".parse::<Role>().expect("cashier"), Role::Cashier);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "manager".parse::<Role>().unwrap_err();
        assert_eq!(err, DomainError::unknown_role("manager"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).expect("json"), "\"admin\"");
        let back: Role = serde_json::from_str("\"cashier\"").expect("json");
        assert_eq!(back, Role::Cashier);
    }
}
