//! Correct JPEG images whose EXIF orientation tag is ignored by naive decoders.
//!
//! Phone cameras usually store pixels as the sensor saw them and record
//! how the device was held in the EXIF orientation tag. This crate locates
//! that tag with a small fixed-size window, without parsing the rest of the
//! EXIF block, and can rewrite the image so that it displays upright.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let mut rdr = BufReader::new(File::open("IMG_2222.JPG").unwrap());
//! match exiforient::read_orientation(&mut rdr) {
//!     Ok(tag) => println!("{}", exiforient::TransformKind::from_tag(tag)),
//!     Err(e) if e.is_no_orientation() => println!("upright"),
//!     Err(e) => panic!("{}", e),
//! }
//! ```

pub mod config;
pub mod error;
pub mod jpeg;
pub mod orientation;
pub mod pattern;
pub mod scan;
pub mod tag;

pub use error::{Error, Result};
pub use jpeg::{clamp_quality, normalize, normalize_with, NormalizeOptions, DEFAULT_JPEG_QUALITY};
pub use orientation::{read_orientation, Endianness, TransformKind};
pub use pattern::PatternByte;
