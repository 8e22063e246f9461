//! # Parkline CLI
//!
//! Runs one parking facility from stdin commands.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Parse arguments ──► 2. Load AppConfig ──► 3. Initialize tracing     │
//! │                                                     │                   │
//! │  6. Session until EOF ◄── 5. Select facility ◄── 4. Read fee models     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! parkline --config parkline.toml < commands.txt
//! PARKLINE_FACILITY=Airport PARKLINE_INVENTORY__CAR_SUV=40 parkline
//! ```

mod commands;
mod config;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use parkline_core::clock::SystemClock;
use parkline_core::selector::select_from_models;
use parkline_core::{Facility, FeeModels};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const USAGE: &str = "\
Usage: parkline [OPTIONS]

Options:
  -c, --config <FILE>   configuration file (default: parkline.toml)
      --json            print tickets and receipts as JSON
  -h, --help            show this message
";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<PathBuf>,
    json: bool,
    show_help: bool,
}

fn main() -> anyhow::Result<()> {
    let options = parse_args(std::env::args().skip(1))?;
    if options.show_help {
        print!("{USAGE}{}", commands::HELP);
        return Ok(());
    }

    let config =
        AppConfig::load(options.config_path.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.log_filter);
    info!(
        facility = %config.facility,
        rates_path = %config.rates_path,
        "Configuration loaded"
    );

    let mut facility = build_facility(&config)?;
    info!(facility = %facility.kind(), "Facility ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::run_session(&mut facility, stdin.lock(), &mut stdout.lock(), options.json)
        .context("Session I/O failed")?;

    info!(
        occupancy = facility.occupancy(),
        receipts_issued = facility.receipts_issued(),
        "Session closed"
    );
    Ok(())
}

fn parse_args<I>(args: I) -> anyhow::Result<CliOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let Some(path) = iter.next() else {
                    bail!("{arg} requires a file path");
                };
                options.config_path = Some(PathBuf::from(path));
            }
            "--json" => options.json = true,
            "-h" | "--help" => options.show_help = true,
            other => bail!("unknown argument '{other}'\n\n{USAGE}"),
        }
    }
    Ok(options)
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_filter` from the config is used.
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn build_facility(config: &AppConfig) -> anyhow::Result<Facility> {
    let file = File::open(&config.rates_path)
        .with_context(|| format!("Failed to open fee models at {}", config.rates_path))?;
    let models = FeeModels::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse fee models at {}", config.rates_path))?;

    let kind = config.facility_kind()?;
    let facility = select_from_models(kind, &models, config.inventory.to_cap(), Arc::new(SystemClock))
        .with_context(|| format!("Failed to set up {kind}"))?;
    Ok(facility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InventoryConfig;
    use parkline_core::FacilityKind;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample_config(facility: &str, inventory: InventoryConfig) -> AppConfig {
        AppConfig {
            rates_path: concat!(env!("CARGO_MANIFEST_DIR"), "/sample.json").to_string(),
            facility: facility.to_string(),
            inventory,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliOptions::default());
    }

    #[test]
    fn test_parse_args_all_flags() {
        let options = parse_args(args(&["--config", "site.toml", "--json", "-h"])).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("site.toml")));
        assert!(options.json);
        assert!(options.show_help);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(args(&["-c"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_build_facility_from_sample() {
        for kind in ["Mall", "Stadium", "Airport"] {
            let facility = build_facility(&sample_config(kind, InventoryConfig::default())).unwrap();
            assert_eq!(facility.kind(), kind.parse::<FacilityKind>().unwrap());
        }
    }

    #[test]
    fn test_build_facility_rejects_trucks_at_stadium() {
        let inventory = InventoryConfig {
            bus_truck: 10,
            ..InventoryConfig::default()
        };
        assert!(build_facility(&sample_config("Stadium", inventory)).is_err());
    }

    #[test]
    fn test_build_facility_missing_file() {
        let config = AppConfig {
            rates_path: "no/such/rates.json".to_string(),
            ..AppConfig::default()
        };
        assert!(build_facility(&config).is_err());
    }
}
