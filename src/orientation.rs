//! EXIF orientation lookup and the transform each orientation calls for
//!
//! The lookup does not parse the TIFF structure. It looks for the exif
//! header to learn the byte order, then for the orientation entry itself,
//! both times scanning from the start of the stream. See
//! https://magnushoff.com/jpeg-orientation.html for what the eight codes mean.

use std::fmt;
use std::io::prelude::*;
use std::io::SeekFrom;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::pattern::{PatternByte, EXIF_SIGNATURE, ORIENTATION_MARKER_BE, ORIENTATION_MARKER_LE};
use crate::scan::scan;
use crate::tag;

/// byte order of the tiff block embedded in the exif segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Interpret the two bytes following the exif header.
    ///
    /// Only "II" selects little endian, anything else is read as big endian.
    pub fn from_marker(marker: [u8; 2]) -> Self {
        if marker == tag::LITTLE_ENDIAN_MARKER {
            return Endianness::Little;
        }
        if marker != tag::BIG_ENDIAN_MARKER {
            debug!(marker = ?marker, "unrecognized byte order marker, assuming big endian");
        }
        Endianness::Big
    }

    fn orientation_marker(self) -> &'static [PatternByte] {
        match self {
            Endianness::Little => &ORIENTATION_MARKER_LE,
            Endianness::Big => &ORIENTATION_MARKER_BE,
        }
    }

    fn read_u16(self, buf: &[u8]) -> u16 {
        match self {
            Endianness::Little => LittleEndian::read_u16(buf),
            Endianness::Big => BigEndian::read_u16(buf),
        }
    }
}

/// Produce the orientation code, between 1 and 8 inclusive, of the JPEG in `rdr`.
///
/// Values outside that range are reported as 1. When the stream has no
/// orientation entry, `Error::NoOrientation` is returned. In both cases
/// the stream is left positioned at its start; after an I/O error its
/// position is unspecified.
pub fn read_orientation<R: Read + Seek>(rdr: &mut R) -> Result<u16> {
    let header: [u8; 8] = match scan(rdr, &EXIF_SIGNATURE)? {
        Some(h) => h,
        None => return no_orientation(rdr),
    };
    rdr.seek(SeekFrom::Start(0))?;

    let order = Endianness::from_marker([header[6], header[7]]);
    debug!(?order, "found exif header");

    let entry: [u8; 10] = match scan(rdr, order.orientation_marker())? {
        Some(e) => e,
        None => return no_orientation(rdr),
    };
    rdr.seek(SeekFrom::Start(0))?;

    let value = order.read_u16(&entry[8..]);
    if value < tag::ORIENTATION_MIN || value > tag::ORIENTATION_MAX {
        debug!(value, "orientation out of range, treating as upright");
        return Ok(tag::ORIENTATION_MIN);
    }

    Ok(value)
}

fn no_orientation<R: Seek>(rdr: &mut R) -> Result<u16> {
    rdr.seek(SeekFrom::Start(0))?;
    Err(Error::NoOrientation)
}

/// Transform that brings an image with a given orientation code upright.
///
/// Rotations are counter-clockwise. Compound variants rotate first and
/// then flip horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Identity,
    FlipHorizontal,
    Rotate180,
    FlipHorizontalRotate180,
    FlipHorizontalRotate270,
    Rotate270,
    FlipHorizontalRotate90,
    Rotate90,
}

impl TransformKind {
    /// any code outside 2..=8 needs no transform
    pub fn from_tag(tag: u16) -> Self {
        use self::TransformKind::*;
        match tag {
            2 => FlipHorizontal,
            3 => Rotate180,
            4 => FlipHorizontalRotate180,
            5 => FlipHorizontalRotate270,
            6 => Rotate270,
            7 => FlipHorizontalRotate90,
            8 => Rotate90,
            _ => Identity,
        }
    }

    /// true if the transform exchanges width and height
    pub fn swaps_dimensions(self) -> bool {
        use self::TransformKind::*;
        match self {
            FlipHorizontalRotate270 | Rotate270 | FlipHorizontalRotate90 | Rotate90 => true,
            Identity | FlipHorizontal | Rotate180 | FlipHorizontalRotate180 => false,
        }
    }

    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        use self::TransformKind::*;
        // image's rotateN turns clockwise
        match self {
            Identity => img,
            FlipHorizontal => img.fliph(),
            Rotate180 => img.rotate180(),
            FlipHorizontalRotate180 => img.rotate180().fliph(),
            FlipHorizontalRotate270 => img.rotate90().fliph(),
            Rotate270 => img.rotate90(),
            FlipHorizontalRotate90 => img.rotate270().fliph(),
            Rotate90 => img.rotate270(),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::TransformKind::*;
        let s = match *self {
            Identity => "identity",
            FlipHorizontal => "flip horizontal",
            Rotate180 => "rotate 180",
            FlipHorizontalRotate180 => "rotate 180, flip horizontal",
            FlipHorizontalRotate270 => "rotate 270, flip horizontal",
            Rotate270 => "rotate 270",
            FlipHorizontalRotate90 => "rotate 90, flip horizontal",
            Rotate90 => "rotate 90",
        };
        f.write_str(s)
    }
}
