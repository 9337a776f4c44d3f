use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};
use stegbox::config::{self, Config, Mode};
use stegbox::constants::EXIT_FAILURE;
use stegbox::probe::{self, ProbeError};
use stegbox::stego::{embed, extract};
use tracing::debug;

fn main() -> ExitCode {
    config::init_tracing();
    let config = Config::from_cli();
    debug!(?config, "starting");

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Open failures were already reported on stdout.
            if !matches!(err.downcast_ref::<ProbeError>(), Some(ProbeError::Open { .. })) {
                eprintln!("Error: {err:#}");
            }
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(config: Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.mode {
        Mode::Probe { path } => {
            let path = match path {
                Some(p) => p,
                None => probe::read_file_name(&mut io::stdin().lock())?,
            };
            let report = probe::run_probe(&path, &mut out)?;
            debug!(path = %report.path.display(), size = report.size, "probe finished");
        }
        Mode::Encode { job, seed } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            embed::encode_file(&job, &mut rng, &mut out)?;
        }
        Mode::Decode {
            original,
            altered,
            decoder,
            save,
        } => {
            extract::decode_files(&original, &altered, decoder, save.as_deref(), &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
