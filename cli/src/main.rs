//! Command-line front end for golf wind generation
//!
//! ```text
//! golf-wind [--record | --verify] [PATH]
//! ```
//!
//! Reads JSON from `PATH` (or stdin when `PATH` is `-` or missing):
//!
//! - default: a round request; prints the wind set
//! - `--record`: a round request; prints the full round record
//! - `--verify`: a round record; rebuilds it and reports any mismatch
//!
//! Logs go to stderr (filter via `RUST_LOG`), so stdout stays pure JSON.

use anyhow::{bail, Context, Result};
use golf_wind_core::{RoundRecord, RoundRequest};
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

enum Mode {
    Generate,
    Record,
    Verify,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (mode, path) = parse_args(std::env::args().skip(1))?;
    let input = read_input(path.as_deref())?;

    match mode {
        Mode::Generate => {
            let request: RoundRequest =
                serde_json::from_str(&input).context("parsing round request")?;
            let wind_set = request.generate().context("generating wind set")?;
            println!("{}", serde_json::to_string_pretty(&wind_set)?);
        }
        Mode::Record => {
            let request: RoundRequest =
                serde_json::from_str(&input).context("parsing round request")?;
            let record = RoundRecord::generate(request).context("recording round")?;
            println!("{}", record.to_json()?);
        }
        Mode::Verify => {
            let record = RoundRecord::from_json(&input).context("parsing round record")?;
            record.verify().context("verifying round record")?;
            info!(fingerprint = %record.fingerprint, "round verified");
            println!("ok {}", record.fingerprint);
        }
    }

    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<(Mode, Option<String>)> {
    let mut mode = Mode::Generate;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--record" => mode = Mode::Record,
            "--verify" => mode = Mode::Verify,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            _ if path.is_some() => bail!("expected at most one input path"),
            _ => path = Some(arg),
        }
    }

    Ok((mode, path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading stdin")?;
            Ok(input)
        }
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}")),
    }
}
