//! Staff listing, fixture-backed until the endpoint exists.

use std::cmp::Ordering;

use crate::fixtures::{self, StaffMember};
use crate::table::{TableRow, TableState};

impl TableRow for StaffMember {
    fn matches(&self, needle: &str) -> bool {
        self.fname.to_lowercase().contains(needle)
            || self.lname.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
    }

    fn cmp_by(&self, other: &Self, column: &'static str) -> Ordering {
        match column {
            "role" => self.role.cmp(&other.role),
            "fname" => self.fname.cmp(&other.fname),
            _ => self.lname.cmp(&other.lname),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UsersScreen {
    pub table: TableState<StaffMember>,
}

impl UsersScreen {
    pub fn new() -> Self {
        Self {
            table: TableState::new(fixtures::staff()),
        }
    }
}

impl Default for UsersScreen {
    fn default() -> Self {
        Self::new()
    }
}
