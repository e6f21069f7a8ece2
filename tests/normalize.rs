//! End-to-end tests against real JPEG streams.
//!
//! Images are generated with the `image` encoder and an APP1 exif segment
//! carrying a single orientation entry is spliced in after SOI.

use std::io::Cursor;

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use image::codecs::jpeg::JpegEncoder;
use image::{GrayImage, ImageFormat, Luma};

use exiforient::{normalize, normalize_with, read_orientation, Error, NormalizeOptions, TransformKind};

const WIDTH: u32 = 32;
const HEIGHT: u32 = 16;

const DARK: u8 = 20;
const BRIGHT: u8 = 235;

/// left half dark, right half bright
fn source_jpeg() -> Vec<u8> {
    let img = GrayImage::from_fn(WIDTH, HEIGHT, |x, _| {
        if x < WIDTH / 2 { Luma([DARK]) } else { Luma([BRIGHT]) }
    });

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, 100);
    encoder.encode_image(&img).unwrap();
    buf
}

fn tiff_block<B: ByteOrder>(marker: &[u8; 2], orientation: u16) -> Vec<u8> {
    let mut v = marker.to_vec();
    v.write_u16::<B>(42).unwrap();
    v.write_u32::<B>(8).unwrap();
    // ifd0 with one entry
    v.write_u16::<B>(1).unwrap();
    v.write_u16::<B>(exiforient::tag::ORIENTATION).unwrap();
    v.write_u16::<B>(exiforient::tag::FORMAT_USHORT).unwrap();
    v.write_u32::<B>(1).unwrap();
    v.write_u16::<B>(orientation).unwrap();
    v.write_u16::<B>(0).unwrap();
    v.write_u32::<B>(0).unwrap();
    v
}

fn with_exif(jpeg: &[u8], tiff: &[u8]) -> Vec<u8> {
    let mut segment = vec![0xFF, 0xE1];
    segment.write_u16::<BigEndian>((2 + 6 + tiff.len()) as u16).unwrap();
    segment.extend_from_slice(&exiforient::tag::EXIF_HEADER);
    segment.extend_from_slice(tiff);

    let mut v = jpeg[..2].to_vec();
    v.extend_from_slice(&segment);
    v.extend_from_slice(&jpeg[2..]);
    v
}

fn tagged_jpeg(orientation: u16, big_endian: bool) -> Vec<u8> {
    let tiff = if big_endian {
        tiff_block::<BigEndian>(b"MM", orientation)
    } else {
        tiff_block::<LittleEndian>(b"II", orientation)
    };
    with_exif(&source_jpeg(), &tiff)
}

fn normalized(data: Vec<u8>) -> GrayImage {
    let mut out = vec![];
    normalize(&mut Cursor::new(data), &mut out).unwrap();
    assert_eq!(&out[..2], &[0xFF, 0xD8]);
    image::load_from_memory_with_format(&out, ImageFormat::Jpeg).unwrap().to_luma8()
}

fn is_dark(img: &GrayImage, x: u32, y: u32) -> bool {
    img.get_pixel(x, y)[0] < 128
}

#[test]
fn reads_orientation_from_jpeg() {
    for code in 1..=8 {
        for &big_endian in &[false, true] {
            let mut cur = Cursor::new(tagged_jpeg(code, big_endian));
            assert_eq!(read_orientation(&mut cur).unwrap(), code);
            assert_eq!(cur.position(), 0);
        }
    }
}

#[test]
fn plain_jpeg_has_no_orientation() {
    let mut cur = Cursor::new(source_jpeg());
    match read_orientation(&mut cur) {
        Err(Error::NoOrientation) => {},
        other => panic!("expected no orientation, got {:?}", other),
    }
    assert_eq!(cur.position(), 0);
}

#[test]
fn plain_jpeg_is_copied_verbatim() {
    let src = source_jpeg();
    let mut out = vec![];
    normalize(&mut Cursor::new(src.clone()), &mut out).unwrap();
    assert_eq!(out, src);
}

#[test]
fn exif_without_orientation_is_copied_verbatim() {
    // ifd0 carries only an image description entry
    let mut tiff = b"II*\0\x08\0\0\0\x01\0".to_vec();
    tiff.extend_from_slice(&[0x0e, 0x01, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, b'a', b'b', b'c', 0x00]);
    tiff.extend_from_slice(&[0x00; 4]);
    let src = with_exif(&source_jpeg(), &tiff);

    let mut out = vec![];
    normalize(&mut Cursor::new(src.clone()), &mut out).unwrap();
    assert_eq!(out, src);
}

#[test]
fn upright_keeps_layout() {
    let img = normalized(tagged_jpeg(1, false));
    assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
    assert!(is_dark(&img, 2, 8));
    assert!(!is_dark(&img, WIDTH - 3, 8));
}

#[test]
fn mirrored_is_flipped() {
    let img = normalized(tagged_jpeg(2, true));
    assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
    assert!(!is_dark(&img, 2, 8));
    assert!(is_dark(&img, WIDTH - 3, 8));
}

#[test]
fn upside_down_is_rotated() {
    let img = normalized(tagged_jpeg(3, false));
    assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
    assert!(!is_dark(&img, 2, 8));
    assert!(is_dark(&img, WIDTH - 3, 8));
}

#[test]
fn rotated_right_turns_clockwise() {
    // the dark left half ends up on top
    let img = normalized(tagged_jpeg(6, false));
    assert_eq!(img.dimensions(), (HEIGHT, WIDTH));
    assert!(is_dark(&img, 8, 2));
    assert!(!is_dark(&img, 8, WIDTH - 3));
}

#[test]
fn rotated_left_turns_counter_clockwise() {
    // the dark left half ends up at the bottom
    let img = normalized(tagged_jpeg(8, true));
    assert_eq!(img.dimensions(), (HEIGHT, WIDTH));
    assert!(!is_dark(&img, 8, 2));
    assert!(is_dark(&img, 8, WIDTH - 3));
}

#[test]
fn dimensions_follow_transform() {
    for code in 1..=8 {
        let img = normalized(tagged_jpeg(code, code % 2 == 0));
        let want = if TransformKind::from_tag(code).swaps_dimensions() { (HEIGHT, WIDTH) } else { (WIDTH, HEIGHT) };
        assert_eq!(img.dimensions(), want, "code {}", code);
        assert_eq!(code >= 5, want == (HEIGHT, WIDTH));
    }
}

#[test]
fn out_of_range_is_reencoded_upright() {
    let img = normalized(tagged_jpeg(9, false));
    assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
    assert!(is_dark(&img, 2, 8));
}

#[test]
fn output_carries_no_orientation() {
    let mut out = vec![];
    let opts = NormalizeOptions { quality: 90 };
    normalize_with(&mut Cursor::new(tagged_jpeg(6, false)), &mut out, &opts).unwrap();

    let err = read_orientation(&mut Cursor::new(out)).unwrap_err();
    assert!(err.is_no_orientation());
}
