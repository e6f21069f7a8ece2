// NB: only what the orientation lookup needs, add here as needed

/// APP1 payload header that introduces an exif block
pub const EXIF_HEADER: [u8; 6] = [b'E', b'x', b'i', b'f', 0x00, 0x00];

/// tiff byte order markers following the exif header
pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [b'I', b'I'];
pub const BIG_ENDIAN_MARKER: [u8; 2] = [b'M', b'M'];

pub const ORIENTATION: u16 = 0x0112;

/// field type of the orientation entry
pub const FORMAT_USHORT: u16 = 3;

pub const ORIENTATION_MIN: u16 = 1;
pub const ORIENTATION_MAX: u16 = 8;
