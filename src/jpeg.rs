//! Rewrite a JPEG so that it displays upright without honoring its
//! orientation tag.

use std::io;
use std::io::prelude::*;
use std::io::{BufReader, SeekFrom};

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};
use crate::orientation::{read_orientation, TransformKind};

/// Quality used when re-encoding, the usual libjpeg default.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

pub const MIN_JPEG_QUALITY: u8 = 1;
pub const MAX_JPEG_QUALITY: u8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// JPEG quality of the re-encoded image, clamped to 1..=100
    pub quality: u8,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions { quality: DEFAULT_JPEG_QUALITY }
    }
}

/// Clamp quality to the range the encoder accepts.
#[inline]
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
}

/// Write the orientation-corrected image in `r` to `w`, using the default options.
///
/// See `normalize_with`.
pub fn normalize<R: Read + Seek, W: Write>(r: &mut R, w: &mut W) -> Result<()> {
    normalize_with(r, w, &NormalizeOptions::default())
}

/// Write the orientation-corrected image in `r` to `w`.
///
/// If `r` has no EXIF orientation data it is copied to `w` unchanged and
/// is left at its end. Otherwise the image is decoded, transformed
/// according to its orientation, and re-encoded, which drops the original
/// metadata. A stream whose orientation is already upright is re-encoded
/// too.
pub fn normalize_with<R: Read + Seek, W: Write>(r: &mut R, w: &mut W, opts: &NormalizeOptions) -> Result<()> {
    let tag = match read_orientation(r) {
        Ok(tag) => tag,
        Err(Error::NoOrientation) => {
            debug!("no orientation data, copying stream through");
            r.seek(SeekFrom::Start(0))?;
            io::copy(r, w)?;
            return Ok(());
        },
        Err(e) => return Err(e),
    };

    let transform = TransformKind::from_tag(tag);
    debug!(tag, %transform, swaps_dimensions = transform.swaps_dimensions(), "normalizing");

    let img = ImageReader::with_format(BufReader::new(&mut *r), ImageFormat::Jpeg).decode()?;
    let img = transform.apply(img);

    // keeps a grayscale source grayscale
    img.write_with_encoder(JpegEncoder::new_with_quality(w, clamp_quality(opts.quality)))?;

    Ok(())
}
