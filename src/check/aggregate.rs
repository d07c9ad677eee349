// Severity aggregation of classified units

use crate::check::classify::{classify, EXIT_STATUS_UNAVAILABLE};
use crate::check::pattern::matches_any;
use crate::check::problem::Problem;
use crate::systemd::{ExitStatusProvider, UnitRecord};

/// A problem found on a named unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub problem: Problem,
    pub unit: String,
}

impl Finding {
    pub fn new(problem: Problem, unit: impl Into<String>) -> Self {
        Self {
            problem,
            unit: unit.into(),
        }
    }
}

/// Findings of one check run, split by severity and kept in inventory order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub criticals: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.criticals.is_empty() && self.warnings.is_empty()
    }
}

/// Classify every record and bucket the findings by the critical policy.
///
/// Non-critical units are only reported for problems more severe than
/// `dead`. Critical units are reported as critical for those problems and as
/// warnings for `dead`/`not loaded`.
pub fn aggregate<S: AsRef<str>>(
    records: &[UnitRecord],
    critical_patterns: &[S],
    exit_status: &dyn ExitStatusProvider,
) -> Findings {
    let mut findings = Findings::default();

    for record in records {
        let problem = classify(
            &record.name,
            &record.load_state,
            &record.active_state,
            &record.sub_state,
            |unit| exit_status_or_sentinel(exit_status, unit),
        );
        let Some(problem) = problem else {
            continue;
        };

        let is_critical = matches_any(critical_patterns, &record.name);
        tracing::debug!("{}: {} (critical: {})", record.name, problem, is_critical);

        if !is_critical && problem.is_benign() {
            continue;
        }

        let finding = Finding::new(problem, record.name.clone());
        if is_critical && !problem.is_benign() {
            findings.criticals.push(finding);
        } else {
            findings.warnings.push(finding);
        }
    }

    findings
}

fn exit_status_or_sentinel(provider: &dyn ExitStatusProvider, unit: &str) -> i32 {
    match provider.exec_main_status(unit) {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!("Could not read exit status of {}: {}", unit, e);
            EXIT_STATUS_UNAVAILABLE
        }
    }
}
