// Collaborator interfaces used by the check

use crate::error::Result;
use crate::systemd::UnitRecord;

/// Which units the inventory provider is asked to enumerate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryRequest {
    /// Every unit known to the manager
    All,
    /// Only the units matching these patterns
    Units(Vec<String>),
}

impl InventoryRequest {
    /// Request every unit when asked to, or when no units were named
    pub fn for_patterns(check_all: bool, patterns: &[String]) -> Self {
        if check_all || patterns.is_empty() {
            InventoryRequest::All
        } else {
            InventoryRequest::Units(patterns.to_vec())
        }
    }

    pub fn patterns(&self) -> &[String] {
        match self {
            InventoryRequest::All => &[],
            InventoryRequest::Units(patterns) => patterns,
        }
    }
}

/// Source of the unit listing
#[cfg_attr(test, mockall::automock)]
pub trait InventoryProvider {
    fn list_units(&self, request: &InventoryRequest) -> Result<Vec<UnitRecord>>;
}

/// Source of the last main-process exit status of a unit
#[cfg_attr(test, mockall::automock)]
pub trait ExitStatusProvider {
    fn exec_main_status(&self, unit_name: &str) -> Result<i32>;
}
