// systemctl-backed unit inventory and exit status queries

use crate::error::{Result, UnitCheckError};
use crate::systemd::models::parse_listing;
use crate::systemd::{ExitStatusProvider, InventoryProvider, InventoryRequest, UnitRecord, UnitScope};
use std::path::PathBuf;
use std::process::Command;

const EXEC_MAIN_STATUS_PREFIX: &str = "ExecMainStatus=";

/// Runs `systemctl` for both the listing and the exit status lookups
#[derive(Debug, Clone)]
pub struct SystemctlClient {
    program: PathBuf,
    scope: UnitScope,
}

impl Default for SystemctlClient {
    fn default() -> Self {
        Self::new("systemctl", UnitScope::System)
    }
}

impl SystemctlClient {
    pub fn new(program: impl Into<PathBuf>, scope: UnitScope) -> Self {
        Self {
            program: program.into(),
            scope,
        }
    }

    /// Arguments of the `list-units` invocation for a request
    pub fn list_units_args(&self, request: &InventoryRequest) -> Vec<String> {
        let mut args: Vec<String> = self.scope.systemctl_flag().into_iter().map(String::from).collect();
        args.extend(
            ["--all", "--no-legend", "--no-pager", "--plain", "list-units"]
                .iter()
                .map(|s| s.to_string()),
        );
        args.extend(request.patterns().iter().cloned());
        args
    }

    /// Arguments of the `show` invocation for one unit
    pub fn show_status_args(&self, unit_name: &str) -> Vec<String> {
        let mut args: Vec<String> = self.scope.systemctl_flag().into_iter().map(String::from).collect();
        args.extend(["show", "-p", "ExecMainStatus", unit_name].iter().map(|s| s.to_string()));
        args
    }

    /// Run systemctl and return its stdout, or an error message describing the failure
    fn run(&self, args: &[String]) -> std::result::Result<String, String> {
        tracing::debug!("Running {} {}", self.program.display(), args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| format!("could not run {}: {}", self.program.display(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let mut message = format!(
                "'{} {}' returned {}",
                self.program.display(),
                args.join(" "),
                output.status
            );
            if !stderr.is_empty() {
                message.push_str(": ");
                message.push_str(stderr);
            }
            return Err(message);
        }

        match String::from_utf8(output.stdout) {
            Ok(stdout) => Ok(stdout),
            Err(e) => {
                tracing::warn!("{} printed invalid UTF-8, replacing invalid bytes", self.program.display());
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}

impl InventoryProvider for SystemctlClient {
    fn list_units(&self, request: &InventoryRequest) -> Result<Vec<UnitRecord>> {
        let output = self
            .run(&self.list_units_args(request))
            .map_err(UnitCheckError::Inventory)?;

        Ok(parse_listing(&output))
    }
}

impl ExitStatusProvider for SystemctlClient {
    fn exec_main_status(&self, unit_name: &str) -> Result<i32> {
        let output = self
            .run(&self.show_status_args(unit_name))
            .map_err(|message| UnitCheckError::ExitStatus {
                unit: unit_name.to_string(),
                message,
            })?;

        parse_exec_main_status(&output).ok_or_else(|| {
            UnitCheckError::ExitStatus {
                unit: unit_name.to_string(),
                message: format!("unexpected output {:?}", output.trim()),
            }
            .into()
        })
    }
}

/// Parse `ExecMainStatus=<n>` as printed by `systemctl show -p ExecMainStatus`
pub fn parse_exec_main_status(output: &str) -> Option<i32> {
    output
        .trim()
        .strip_prefix(EXEC_MAIN_STATUS_PREFIX)
        .and_then(|value| value.trim().parse().ok())
}
