use std::{env, path::PathBuf, process::ExitCode};

use plane_specs::{compute_report, PlaneConfig, PlaneSource, PlaneType};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: plane_specs [CONFIG.yaml] [--json]";

fn main() -> ExitCode {
    setup_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut json = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return Err(USAGE.into()),
        }
    }

    let source = match path {
        Some(path) => PlaneSource::File(path),
        None => PlaneSource::Programmed(PlaneType::Trainer),
    };
    let config = PlaneConfig::new(source)?;
    info!(name = %config.name, "computing plane specs");

    let report = compute_report(&config.to_plane())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", config.name);
        println!("{report}");
    }

    if !report.passes_all_checks() {
        let failed: Vec<_> = report.failed_checks().map(|check| check.name).collect();
        info!(failed = ?failed, "design is outside course bounds");
    }
    Ok(())
}
