//! JPEG marker classification, as far as walking a file to its end needs it.

/// Marker prefix byte.
pub const MARKER_PREFIX: u8 = 0xFF;

/// Start of Image, `FF D8`.
pub const SOI: [u8; 2] = [MARKER_PREFIX, 0xD8];

/// End of Image, `FF D9`.
pub const EOI: [u8; 2] = [MARKER_PREFIX, 0xD9];

/// JPEG marker kinds (ITU T.81 Table B.1), collapsed to what decides
/// how many bytes follow a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Marker {
    /// Start of Image.
    SOI,
    /// End of Image.
    EOI,
    /// Start of Scan, followed by entropy-coded data.
    SOS,
    /// Restart marker (0-7).
    RST(u8),
    /// Temporary marker for arithmetic coding.
    TEM,
    /// Any other marker, all of them carry a length field.
    Segment(u8),
}

impl Marker {
    /// Returns true if this marker has a length field following it.
    pub fn has_length(self) -> bool {
        !matches!(self, Marker::RST(..) | Marker::SOI | Marker::EOI | Marker::TEM)
    }

    /// Convert the byte after `0xFF` to a Marker.
    ///
    /// Returns None for 0x00 (stuffed byte) and 0xFF (fill byte).
    pub fn from_u8(n: u8) -> Option<Marker> {
        match n {
            0x00 | 0xFF => None,
            0x01 => Some(Marker::TEM),
            0xD0..=0xD7 => Some(Marker::RST(n - 0xD0)),
            0xD8 => Some(Marker::SOI),
            0xD9 => Some(Marker::EOI),
            0xDA => Some(Marker::SOS),
            _ => Some(Marker::Segment(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_from_u8() {
        assert_eq!(Marker::from_u8(0xD8), Some(Marker::SOI));
        assert_eq!(Marker::from_u8(0xD9), Some(Marker::EOI));
        assert_eq!(Marker::from_u8(0xDA), Some(Marker::SOS));
        assert_eq!(Marker::from_u8(0xD3), Some(Marker::RST(3)));
        assert_eq!(Marker::from_u8(0xE1), Some(Marker::Segment(0xE1)));
        assert_eq!(Marker::from_u8(0x00), None);
        assert_eq!(Marker::from_u8(0xFF), None);
    }

    #[test]
    fn test_has_length() {
        assert!(Marker::Segment(0xC0).has_length());
        assert!(Marker::Segment(0xDB).has_length());
        assert!(Marker::SOS.has_length());
        assert!(!Marker::SOI.has_length());
        assert!(!Marker::EOI.has_length());
        assert!(!Marker::RST(0).has_length());
        assert!(!Marker::TEM.has_length());
    }
}
