use serde::{Deserialize, Serialize};

use brewpos_core::UserId;

use crate::Role;

/// The authenticated user as the rest of the application sees it.
///
/// Built once per login/restoration from the backend's user payload; by the
/// time an `Identity` exists, the role has already been validated against
/// the closed role set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Identity {
    /// Name shown in the side-menu profile block.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_first_and_last() {
        let identity = Identity {
            user_id: UserId::new(1),
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            role: Role::Cashier,
        };
        assert_eq!(identity.display_name(), "Maria Santos");
    }
}
