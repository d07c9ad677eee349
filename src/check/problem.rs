// Unit problem taxonomy

use std::fmt;

/// Anomaly a unit can be in, ordered from most to least severe.
///
/// The derived `Ord` follows the discriminants, so `Problem::Failed` is the
/// smallest value and therefore the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Problem {
    Failed = 0,
    ActivatingAutoRestart = 1,
    NotLoadedButNotInactive = 2,
    NotLoadedButNotDead = 3,
    Dead = 4,
    NotLoaded = 5,
}

/// Problems at or past this rank are only reported for critical units.
pub const BENIGN_ANOMALY_THRESHOLD: Problem = Problem::Dead;

impl Problem {
    /// Every problem, most severe first
    pub const ALL: [Problem; 6] = [
        Problem::Failed,
        Problem::ActivatingAutoRestart,
        Problem::NotLoadedButNotInactive,
        Problem::NotLoadedButNotDead,
        Problem::Dead,
        Problem::NotLoaded,
    ];

    /// Severity rank; 0 is the most severe
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Human-readable label used in check messages
    pub fn label(self) -> &'static str {
        match self {
            Problem::Failed => "failed",
            Problem::ActivatingAutoRestart => "activating auto restart",
            Problem::NotLoadedButNotInactive => "not loaded but not inactive",
            Problem::NotLoadedButNotDead => "not loaded but not dead",
            Problem::Dead => "dead",
            Problem::NotLoaded => "not loaded",
        }
    }

    /// Returns true for anomalies that are normal for units nobody asked about
    pub fn is_benign(self) -> bool {
        self.rank() >= BENIGN_ANOMALY_THRESHOLD.rank()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
