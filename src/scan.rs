//! constant-memory search for a byte pattern in a stream
//!
//! The stream is viewed through a fixed window that advances by half its
//! size at a time. The half kept from the previous step is searched again
//! together with the fresh half, so a match split across two reads is
//! still seen whole as long as it is no longer than half the window.

use std::io;
use std::io::prelude::*;

use tracing::{debug, trace};

use crate::pattern::{self, PatternByte};

pub const WINDOW_SIZE: usize = 32;
pub const HALF_WINDOW: usize = WINDOW_SIZE / 2;

/// Scan `rdr` for the first occurrence of `pattern`, returning the `N`
/// bytes starting at the match.
///
/// Returns `Ok(None)` if the stream ends before a match is seen, or if
/// `pattern` is longer than `N`. The read position afterwards is somewhere
/// past the match and should not be relied upon.
pub fn scan<R: Read, const N: usize>(rdr: &mut R, pattern: &[PatternByte]) -> io::Result<Option<[u8; N]>> {
    // longer matches could straddle two slides and be missed
    const { assert!(N <= HALF_WINDOW, "match length exceeds half the window") };

    let mut window = [0u8; WINDOW_SIZE];
    let mut filled = fill(rdr, &mut window)?;
    let mut base = 0u64; // stream offset of window[0]

    loop {
        if let Some(i) = pattern::find(&window[..filled], pattern, N) {
            debug!(offset = base + i as u64, "pattern matched");
            let mut found = [0u8; N];
            found.copy_from_slice(&window[i..i + N]);
            return Ok(Some(found));
        }

        // a short fill means the stream is exhausted
        if filled < WINDOW_SIZE {
            trace!(scanned = base + filled as u64, "no match before end of stream");
            return Ok(None);
        }

        window.copy_within(HALF_WINDOW.., 0);
        let n = fill(rdr, &mut window[HALF_WINDOW..])?;
        if n == 0 {
            trace!(scanned = base + WINDOW_SIZE as u64, "no match before end of stream");
            return Ok(None);
        }
        filled = HALF_WINDOW + n;
        base += HALF_WINDOW as u64;
        trace!(offset = base, "window advanced");
    }
}

/// read until `buf` is full or the stream is exhausted, returning the byte count
fn fill<R: Read>(rdr: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut n = 0;
    while n < buf.len() {
        match rdr.read(&mut buf[n..]) {
            Ok(0) => break,
            Ok(k) => n += k,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {},
            Err(e) => return Err(e),
        }
    }
    Ok(n)
}
