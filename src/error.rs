use std::io;

use thiserror::Error;

/// Errors produced while reading or normalizing a JPEG stream
#[derive(Debug, Error)]
pub enum Error {
    /// The stream carries no EXIF orientation entry.
    ///
    /// This is the ordinary outcome for images without metadata and means
    /// no transform should be applied.
    #[error("The given stream does not contain any EXIF orientation information")]
    NoOrientation,

    /// Reading or seeking the underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The JPEG codec could not decode or encode the image
    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// true for the expected "nothing to do" outcome
    pub fn is_no_orientation(&self) -> bool {
        matches!(self, Error::NoOrientation)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
