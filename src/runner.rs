// Single check execution

use crate::check::{aggregate, matches_any, CheckOutcome};
use crate::config::Config;
use crate::systemd::{ExitStatusProvider, InventoryProvider, InventoryRequest, UnitRecord};

/// Run one check: list units, drop ignored ones, classify and aggregate.
///
/// A failure to list units yields an UNKNOWN outcome carrying the error text.
pub fn run_check(
    config: &Config,
    inventory: &dyn InventoryProvider,
    exit_status: &dyn ExitStatusProvider,
) -> CheckOutcome {
    let request = InventoryRequest::for_patterns(config.check_all, &config.critical_units);
    tracing::debug!("Listing units: {:?}", request);

    let records = match inventory.list_units(&request) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Unit listing failed: {:#}", e);
            return CheckOutcome::unknown(format!("{:#}", e));
        }
    };

    let records = without_ignored(records, &config.ignored_units);
    let findings = aggregate(&records, &config.critical_units, exit_status);
    tracing::debug!(
        "{} units checked, {} critical, {} warning",
        records.len(),
        findings.criticals.len(),
        findings.warnings.len()
    );

    CheckOutcome::from_findings(&findings)
}

/// Remove units matching any ignore pattern
pub fn without_ignored(records: Vec<UnitRecord>, ignored: &[String]) -> Vec<UnitRecord> {
    if ignored.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            let ignore = matches_any(ignored, &record.name);
            if ignore {
                tracing::debug!("Ignoring {}", record.name);
            }
            !ignore
        })
        .collect()
}
