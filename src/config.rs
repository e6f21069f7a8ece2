//! Command line configuration for the `exiforient` binary.
//!
//! Options can also be supplied through the environment:
//!
//! - `EXIFORIENT_QUALITY` - JPEG quality used by `normalize` (default: 75)
//! - `RUST_LOG` - log filter, overrides `--verbose`

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::jpeg::{NormalizeOptions, DEFAULT_JPEG_QUALITY, MAX_JPEG_QUALITY, MIN_JPEG_QUALITY};

/// Detect and undo EXIF orientation in JPEG files.
#[derive(Parser, Debug, Clone)]
#[command(name = "exiforient")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the orientation code of each file and the transform it needs.
    Orientation(OrientationConfig),

    /// Write an upright copy of a JPEG file.
    ///
    /// Files without orientation data are copied unchanged.
    Normalize(NormalizeConfig),
}

#[derive(Args, Debug, Clone)]
pub struct OrientationConfig {
    /// JPEG files to inspect.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeConfig {
    /// Source JPEG file.
    pub input: PathBuf,

    /// Destination file, overwritten if it exists.
    pub output: PathBuf,

    /// JPEG quality of the re-encoded image (1-100).
    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY, env = "EXIFORIENT_QUALITY")]
    pub quality: u8,
}

impl NormalizeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.quality < MIN_JPEG_QUALITY || self.quality > MAX_JPEG_QUALITY {
            return Err(format!(
                "quality must be between {} and {}",
                MIN_JPEG_QUALITY, MAX_JPEG_QUALITY
            ));
        }

        // the output is truncated before the input is read
        if same_file(&self.input, &self.output) {
            return Err("input and output must be different files".to_string());
        }

        Ok(())
    }

    pub fn options(&self) -> NormalizeOptions {
        NormalizeOptions { quality: self.quality }
    }
}

/// true if both paths name the same file, however they are spelled
///
/// A path that cannot be resolved (an output that does not exist yet) is
/// compared as written.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
