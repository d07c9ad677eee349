// Unit anomaly detection and severity aggregation

pub mod aggregate;
pub mod classify;
pub mod message;
pub mod pattern;
pub mod problem;
pub mod status;


pub use aggregate::{aggregate, Finding, Findings};
pub use classify::{classify, EXIT_STATUS_UNAVAILABLE};
pub use message::format_findings;
pub use pattern::{matches, matches_any};
pub use problem::{Problem, BENIGN_ANOMALY_THRESHOLD};
pub use status::{CheckOutcome, ServiceState};
