// Systemd D-Bus unit inventory and exit status queries using zbus

use crate::error::{Result, UnitCheckError};
use crate::systemd::{ExitStatusProvider, InventoryProvider, InventoryRequest, UnitRecord, UnitScope};
use zbus::blocking::{Connection, Proxy};
use zbus::zvariant::OwnedObjectPath;

const SYSTEMD_DESTINATION: &str = "org.freedesktop.systemd1";
const SYSTEMD_PATH: &str = "/org/freedesktop/systemd1";
const MANAGER_INTERFACE: &str = "org.freedesktop.systemd1.Manager";
const SERVICE_INTERFACE: &str = "org.freedesktop.systemd1.Service";

// ListUnits returns array of (name, description, load_state, active_state, sub_state,
//                             followed, unit_path, job_id, job_type, job_path)
pub type UnitListEntry = (
    String,
    String,
    String,
    String,
    String,
    String,
    OwnedObjectPath,
    u32,
    String,
    OwnedObjectPath,
);

/// An empty state filter matches units in any state
const ANY_STATE: &[&str] = &[];

/// Manager method used to answer an inventory request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListUnitsCall<'a> {
    /// `ListUnits()`
    All,
    /// `ListUnitsByPatterns(states, patterns)`
    ByPatterns {
        states: &'a [&'a str],
        patterns: &'a [String],
    },
}

impl<'a> ListUnitsCall<'a> {
    pub fn for_request(request: &'a InventoryRequest) -> Self {
        match request {
            InventoryRequest::All => ListUnitsCall::All,
            InventoryRequest::Units(patterns) => ListUnitsCall::ByPatterns {
                states: ANY_STATE,
                patterns,
            },
        }
    }

    pub fn method_name(&self) -> &'static str {
        match self {
            ListUnitsCall::All => "ListUnits",
            ListUnitsCall::ByPatterns { .. } => "ListUnitsByPatterns",
        }
    }
}

/// Keep the fields of a ListUnits entry the check needs
pub fn unit_record_from_entry(entry: UnitListEntry) -> UnitRecord {
    let (name, _, load_state, active_state, sub_state, _, _, _, _, _) = entry;
    UnitRecord::new(name, load_state, active_state, sub_state)
}

pub fn inventory_error(error: zbus::Error) -> UnitCheckError {
    UnitCheckError::Inventory(error.to_string())
}

pub fn exit_status_error(unit_name: &str, error: zbus::Error) -> UnitCheckError {
    UnitCheckError::ExitStatus {
        unit: unit_name.to_string(),
        message: error.to_string(),
    }
}

/// Systemd D-Bus client for the system or session bus
pub struct DbusClient {
    connection: Connection,
}

impl DbusClient {
    /// Connect to the bus that hosts the manager of the given scope
    pub fn connect(scope: UnitScope) -> Result<Self> {
        let connection = match scope {
            UnitScope::System => Connection::system(),
            UnitScope::User => Connection::session(),
        }
        .map_err(|e| UnitCheckError::Dbus(format!("Failed to connect to {} bus: {}", scope.label(), e)))?;

        Ok(Self { connection })
    }

    fn manager(&self) -> zbus::Result<Proxy<'static>> {
        Proxy::new(&self.connection, SYSTEMD_DESTINATION, SYSTEMD_PATH, MANAGER_INTERFACE)
    }
}

impl InventoryProvider for DbusClient {
    fn list_units(&self, request: &InventoryRequest) -> Result<Vec<UnitRecord>> {
        let manager = self.manager().map_err(inventory_error)?;

        let call = ListUnitsCall::for_request(request);
        let reply: zbus::Result<Vec<UnitListEntry>> = match call {
            ListUnitsCall::All => manager.call(call.method_name(), &()),
            ListUnitsCall::ByPatterns { states, patterns } => {
                manager.call(call.method_name(), &(states, patterns))
            }
        };
        let units = reply.map_err(inventory_error)?;

        tracing::debug!("D-Bus returned {} units", units.len());

        Ok(units.into_iter().map(unit_record_from_entry).collect())
    }
}

impl ExitStatusProvider for DbusClient {
    fn exec_main_status(&self, unit_name: &str) -> Result<i32> {
        let to_error = |e: zbus::Error| exit_status_error(unit_name, e);

        let manager = self.manager().map_err(to_error)?;
        let reply: zbus::Result<OwnedObjectPath> = manager.call("GetUnit", &(unit_name,));
        let unit_path = reply.map_err(to_error)?;

        let service = Proxy::new(
            &self.connection,
            SYSTEMD_DESTINATION,
            unit_path.as_str(),
            SERVICE_INTERFACE,
        )
        .map_err(to_error)?;

        let status: zbus::Result<i32> = service.get_property("ExecMainStatus");
        Ok(status.map_err(to_error)?)
    }
}
