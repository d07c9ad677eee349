// Unitcheck - Systemd Units Monitoring Check
// Main entry point

use clap::error::ErrorKind;
use clap::Parser;
use nagiosplugin::RunResult;
use std::path::PathBuf;
use std::process::ExitCode;
use unitcheck::check::{CheckOutcome, ServiceState};
use unitcheck::config::{Backend, Config};
use unitcheck::error::Result;
use unitcheck::runner::run_check;
use unitcheck::systemd::{DbusClient, SystemctlClient, UnitScope};

/// Check systemd units for anomalies like failed, crash-looping or
/// not-loaded-but-running units. Returns at most WARNING unless critical
/// units are given.
#[derive(Parser, Debug)]
#[command(name = "unitcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Check all units (the default when no critical units are given)
    #[arg(short = 'a', long = "all")]
    check_all: bool,

    /// Unit to return CRITICAL for when failed; `name@*` matches all instances
    #[arg(short = 's', long = "critical", value_name = "UNIT")]
    critical_units: Vec<String>,

    /// Unit to ignore; `name@*` matches all instances
    #[arg(short = 'i', long = "ignore", value_name = "UNIT")]
    ignored_units: Vec<String>,

    /// Check units of the user service manager
    #[arg(long)]
    user: bool,

    /// Backend used to query systemd
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// Path of the systemctl executable
    #[arg(long = "systemctl", value_name = "PATH")]
    systemctl_path: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    /// Apply command line options on top of the loaded config
    fn merge_into(self, mut config: Config) -> Config {
        config.check_all |= self.check_all;
        config.critical_units.extend(self.critical_units);
        config.ignored_units.extend(self.ignored_units);
        if self.user {
            config.scope = UnitScope::User;
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(path) = self.systemctl_path {
            config.systemctl_path = path;
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(print_error) = e.print() {
                eprintln!("Could not print usage: {}", print_error);
            }
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(ServiceState::Unknown.exit_code() as u8),
            };
        }
    };

    init_logging(cli.debug);

    match check(cli) {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::from(outcome.exit_code() as u8)
        }
        Err(e) => RunResult::Err(ServiceState::Unknown, format!("{:#}", e)).print_and_exit(),
    }
}

// Stdout carries the check result, so logs go to stderr
fn init_logging(debug: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not initialize logging: {}", e);
    }
}

fn check(cli: Cli) -> Result<CheckOutcome> {
    let config_path = cli.config.clone();
    let config = cli.merge_into(Config::load(config_path)?);
    tracing::debug!("Effective config: {:?}", config);

    let outcome = match config.backend {
        Backend::Systemctl => {
            let client = SystemctlClient::new(config.systemctl_path.clone(), config.scope);
            run_check(&config, &client, &client)
        }
        Backend::Dbus => {
            let client = DbusClient::connect(config.scope)?;
            run_check(&config, &client, &client)
        }
    };

    Ok(outcome)
}
