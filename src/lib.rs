// Unitcheck - Systemd Units Monitoring Check
// Library root

pub mod check;
pub mod config;
pub mod error;
pub mod runner;
pub mod systemd;
