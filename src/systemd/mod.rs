// Systemd integration module

pub mod dbus;
pub mod models;
pub mod provider;
pub mod systemctl;


pub use dbus::DbusClient;
pub use models::{parse_listing, UnitRecord, UnitScope};
pub use provider::{ExitStatusProvider, InventoryProvider, InventoryRequest};
pub use systemctl::{parse_exec_main_status, SystemctlClient};

#[cfg(test)]
pub use provider::{MockExitStatusProvider, MockInventoryProvider};
