//! exiforient - detect and undo EXIF orientation in JPEG files.

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exiforient::config::{Cli, Command, NormalizeConfig, OrientationConfig};
use exiforient::{normalize_with, read_orientation, Error, TransformKind};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Orientation(config) => run_orientation(config),
        Command::Normalize(config) => run_normalize(config),
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose { "exiforient=debug" } else { "exiforient=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_orientation(config: OrientationConfig) -> ExitCode {
    let mut status = ExitCode::SUCCESS;

    for path in &config.files {
        match orientation_of(path) {
            Ok(tag) => println!("{}: {} ({})", path.display(), tag, TransformKind::from_tag(tag)),
            Err(Error::NoOrientation) => println!("{}: no orientation", path.display()),
            Err(e) => {
                error!("{}: {}", path.display(), e);
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}

fn orientation_of(path: &Path) -> exiforient::Result<u16> {
    let mut rdr = BufReader::new(File::open(path)?);
    read_orientation(&mut rdr)
}

fn run_normalize(config: NormalizeConfig) -> ExitCode {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    match normalize_file(&config) {
        Ok(()) => {
            info!("wrote {}", config.output.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{}: {}", config.input.display(), e);
            ExitCode::FAILURE
        },
    }
}

fn normalize_file(config: &NormalizeConfig) -> exiforient::Result<()> {
    debug!(input = %config.input.display(), quality = config.quality, "normalizing");

    let mut rdr = BufReader::new(File::open(&config.input)?);
    let mut w = BufWriter::new(File::create(&config.output)?);

    normalize_with(&mut rdr, &mut w, &config.options())?;
    w.flush()?;
    Ok(())
}
