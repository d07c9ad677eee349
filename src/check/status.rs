// Monitoring service states and the final check line

use crate::check::aggregate::Findings;
use crate::check::message::format_findings;
use std::fmt;

pub use nagiosplugin::ServiceState;

/// Result of a check run: the state and the single line printed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub state: ServiceState,
    pub message: String,
}

impl CheckOutcome {
    /// Build the outcome from aggregated findings.
    ///
    /// Any critical finding makes the run CRITICAL and the message then lists
    /// criticals followed by warnings.
    pub fn from_findings(findings: &Findings) -> Self {
        if !findings.criticals.is_empty() {
            let all = findings.criticals.iter().chain(findings.warnings.iter());
            Self::with_details(ServiceState::Critical, &format_findings(all))
        } else if !findings.warnings.is_empty() {
            Self::with_details(ServiceState::Warning, &format_findings(&findings.warnings))
        } else {
            Self {
                state: ServiceState::Ok,
                message: ServiceState::Ok.to_string(),
            }
        }
    }

    /// Outcome for a run that could not inspect the units at all
    pub fn unknown(error: impl fmt::Display) -> Self {
        Self::with_details(ServiceState::Unknown, &error.to_string())
    }

    fn with_details(state: ServiceState, details: &str) -> Self {
        Self {
            state,
            message: format!("{}: {}", state, details),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
