//! Locating the end of the image stream inside a JPEG file.
//!
//! Everything behind the end-of-image marker is ignored by decoders,
//! that is where payloads live. Two strategies are offered, see [`ScanMode`].

pub mod marker;

pub use marker::{Marker, EOI, MARKER_PREFIX, SOI};

use crate::ScanMode;

/// Index of the `0xFF` byte of the end-of-image marker, or `None` when
/// there is none to be found with the given strategy.
pub fn find_eoi(data: &[u8], mode: ScanMode) -> Option<usize> {
    match mode {
        ScanMode::FirstMarker => first_eoi(data),
        ScanMode::SegmentWalk => walk_to_eoi(data),
    }
}

/// First occurrence of `FF D9` anywhere in `data`.
///
/// Knows nothing about segments: an EXIF thumbnail or any other `FF D9`
/// inside a segment ends the image early.
pub fn first_eoi(data: &[u8]) -> Option<usize> {
    data.windows(EOI.len()).position(|w| w == EOI)
}

/// Walks the segment structure from SOI up to the EOI that closes the image.
///
/// Length-prefixed segments are skipped as a whole, entropy-coded data after
/// SOS is skipped up to the next marker that is neither stuffing nor restart.
pub fn walk_to_eoi(data: &[u8]) -> Option<usize> {
    if !data.starts_with(&SOI) {
        return None;
    }

    let mut pos = SOI.len();
    loop {
        let (at, marker) = next_marker(data, pos)?;
        match marker {
            Marker::EOI => return Some(at),
            Marker::SOS => {
                let header_end = skip_segment(data, at)?;
                pos = skip_entropy_coded(data, header_end)?;
            }
            m if m.has_length() => pos = skip_segment(data, at)?,
            _ => pos = at + 2,
        }
    }
}

/// Reads the marker starting at `pos`, fill bytes are skipped.
/// Returns the index of the `0xFF` right before the marker byte.
fn next_marker(data: &[u8], mut pos: usize) -> Option<(usize, Marker)> {
    if *data.get(pos)? != MARKER_PREFIX {
        return None;
    }
    while *data.get(pos + 1)? == MARKER_PREFIX {
        pos += 1;
    }

    Marker::from_u8(data[pos + 1]).map(|m| (pos, m))
}

/// End of the segment whose marker starts at `at`.
/// The length field counts itself but not the marker.
fn skip_segment(data: &[u8], at: usize) -> Option<usize> {
    let length = data.get(at + 2..at + 4)?;
    let length = u16::from_be_bytes([length[0], length[1]]) as usize;
    if length < 2 {
        return None;
    }

    let end = at + 2 + length;
    (end <= data.len()).then_some(end)
}

/// Position of the first real marker after entropy-coded scan data.
fn skip_entropy_coded(data: &[u8], mut pos: usize) -> Option<usize> {
    while pos + 1 < data.len() {
        if data[pos] == MARKER_PREFIX {
            match data[pos + 1] {
                // stuffed 0xFF or restart marker, both belong to the scan
                0x00 | 0xD0..=0xD7 => {
                    pos += 2;
                    continue;
                }
                MARKER_PREFIX => {
                    pos += 1;
                    continue;
                }
                _ => return Some(pos),
            }
        }
        pos += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(marker: u8, body: &[u8]) -> Vec<u8> {
        let len = (body.len() + 2) as u16;
        let mut s = vec![0xFF, marker];
        s.extend_from_slice(&len.to_be_bytes());
        s.extend_from_slice(body);
        s
    }

    /// SOI, an APP1 segment hiding `FF D9`, SOS with scan data that
    /// contains stuffing and a restart marker, EOI.
    fn jpeg_with_thumbnail_eoi() -> Vec<u8> {
        let mut data = SOI.to_vec();
        data.extend(segment(0xE0, b"JFIF\0\x01\x01"));
        data.extend(segment(0xE1, &[0x01, 0xFF, 0xD9, 0x02]));
        data.extend(segment(0xDB, &[0u8; 65]));
        data.extend(segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]));
        data.extend_from_slice(&[0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56, 0xFF, 0xFF, 0x00]);
        data.extend_from_slice(&EOI);
        data
    }

    #[test]
    fn first_marker_stops_inside_segment() {
        let data = jpeg_with_thumbnail_eoi();
        let thumbnail_eoi = data.windows(2).position(|w| w == EOI).unwrap();

        assert_eq!(first_eoi(&data), Some(thumbnail_eoi));
        assert!(thumbnail_eoi < data.len() - 2);
    }

    #[test]
    fn segment_walk_finds_closing_eoi() {
        let mut data = jpeg_with_thumbnail_eoi();
        let true_eoi = data.len() - 2;
        data.extend_from_slice(&[0x50, 0x4B, 0x03, 0x04, 0xFF, 0xD9]);

        assert_eq!(walk_to_eoi(&data), Some(true_eoi));
        assert_eq!(find_eoi(&data, ScanMode::SegmentWalk), Some(true_eoi));
    }

    #[test]
    fn segment_walk_skips_fill_bytes_before_markers() {
        let mut data = SOI.to_vec();
        data.extend_from_slice(&[0xFF, 0xFF]);
        data.extend(segment(0xFE, b"comment"));
        data.extend_from_slice(&[0xFF, 0xFF, 0xD9]);

        assert_eq!(walk_to_eoi(&data), Some(data.len() - 2));
    }

    #[test]
    fn segment_walk_rejects_broken_structure() {
        assert_eq!(walk_to_eoi(&[0x00, 0xFF, 0xD9]), None);

        let mut truncated = SOI.to_vec();
        truncated.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x40, 0x00]);
        assert_eq!(walk_to_eoi(&truncated), None);

        let mut no_eoi = SOI.to_vec();
        no_eoi.extend(segment(0xDA, &[0x00]));
        no_eoi.extend_from_slice(&[0x01, 0x02, 0x03]);
        assert_eq!(walk_to_eoi(&no_eoi), None);
    }

    #[test]
    fn first_marker_without_eoi() {
        assert_eq!(first_eoi(&[0xFF, 0xD8, 0x00]), None);
        assert_eq!(first_eoi(&[]), None);
        assert_eq!(first_eoi(&[0xFF, 0xD9]), Some(0));
    }
}
