// Systemd unit data models

use serde::{Deserialize, Serialize};

/// UnitScope represents whether units are checked on the system or user manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitScope {
    /// System-level manager (PID 1)
    #[default]
    System,
    /// User-level manager (runs in user session)
    User,
}

impl UnitScope {
    /// Get display label for the scope
    pub fn label(&self) -> &'static str {
        match self {
            UnitScope::System => "system",
            UnitScope::User => "user",
        }
    }

    /// Get systemctl flag for this scope
    pub fn systemctl_flag(&self) -> Option<&'static str> {
        match self {
            UnitScope::System => None,
            UnitScope::User => Some("--user"),
        }
    }
}

/// One row of the unit listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub name: String,
    pub load_state: String,
    pub active_state: String,
    pub sub_state: String,
}

impl UnitRecord {
    pub fn new(
        name: impl Into<String>,
        load_state: impl Into<String>,
        active_state: impl Into<String>,
        sub_state: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            load_state: load_state.into(),
            active_state: active_state.into(),
            sub_state: sub_state.into(),
        }
    }

    /// Parse a `systemctl list-units --no-legend` line.
    ///
    /// Only the first four whitespace-separated fields are used; the
    /// description that follows is ignored. Returns None for lines with
    /// fewer than four fields.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace().peekable();

        // Failed units may be prefixed with a status bullet
        if matches!(fields.peek(), Some(&"●") | Some(&"*")) {
            fields.next();
        }

        let name = fields.next()?;
        let load_state = fields.next()?;
        let active_state = fields.next()?;
        let sub_state = fields.next()?;

        Some(Self::new(name, load_state, active_state, sub_state))
    }
}

/// Parse a whole unit listing, skipping blank and malformed lines
pub fn parse_listing(output: &str) -> Vec<UnitRecord> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = UnitRecord::parse_line(line);
            if record.is_none() {
                tracing::warn!("Skipping malformed unit line: {:?}", line.trim());
            }
            record
        })
        .collect()
}
