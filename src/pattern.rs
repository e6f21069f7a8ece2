//! byte patterns with wildcard slots, and the matcher that locates them

use crate::tag;

/// single element of a byte pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternByte {
    Literal(u8),
    /// matches any byte value
    Wildcard,
}

impl PatternByte {
    #[inline]
    pub fn matches(self, b: u8) -> bool {
        match self {
            PatternByte::Literal(v) => v == b,
            PatternByte::Wildcard => true,
        }
    }
}

use self::PatternByte::{Literal as L, Wildcard as W};

/// "Exif\0\0", the start of an exif APP1 payload
pub static EXIF_SIGNATURE: [PatternByte; 6] = [
    L(tag::EXIF_HEADER[0]), L(tag::EXIF_HEADER[1]), L(tag::EXIF_HEADER[2]),
    L(tag::EXIF_HEADER[3]), L(tag::EXIF_HEADER[4]), L(tag::EXIF_HEADER[5]),
];

// tag 0x0112, type ushort, count 1, then the 16 bit value padded to 4 bytes.
// only the value's low byte is masked out, the high byte of a valid
// orientation is always zero.

/// orientation entry as laid out in an "II" tiff block
pub static ORIENTATION_MARKER_LE: [PatternByte; 10] = [
    L(0x12), L(0x01), L(0x03), L(0x00), L(0x01), L(0x00), L(0x00), L(0x00), W, L(0x00),
];

/// orientation entry as laid out in an "MM" tiff block
pub static ORIENTATION_MARKER_BE: [PatternByte; 10] = [
    L(0x01), L(0x12), L(0x00), L(0x03), L(0x00), L(0x00), L(0x00), L(0x01), L(0x00), W,
];

/// Return the offset of the leftmost position in `window` where `pattern`
/// matches and at least `len` bytes are available, or None.
///
/// `len` may exceed the pattern length, in which case the trailing bytes
/// are captured by the caller without being compared. A pattern longer
/// than `len` never matches.
pub fn find(window: &[u8], pattern: &[PatternByte], len: usize) -> Option<usize> {
    if pattern.len() > len {
        return None;
    }

    let last = window.len().checked_sub(len)?;
    (0..=last).find(|&i| {
        pattern.iter()
            .zip(&window[i..])
            .all(|(p, &b)| p.matches(b))
    })
}
