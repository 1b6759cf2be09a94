/// Carrier configuration, handed explicitly to every operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarrierOptions {
    /// How the end of the image stream is found.
    pub scan: ScanMode,
    /// How strictly a file must look like a JPEG before it is accepted.
    pub signature: SignaturePolicy,
}

impl CarrierOptions {
    pub fn with_scan(mut self, scan: ScanMode) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_signature(mut self, signature: SignaturePolicy) -> Self {
        self.signature = signature;
        self
    }
}

/// Strategy for locating the end-of-image marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// The first `FF D9` pair in the file, no matter where it sits.
    /// Compatible with carriers written by older tools.
    #[default]
    FirstMarker,
    /// The EOI reached by walking the segment structure, which is immune
    /// to `FF D9` pairs inside EXIF thumbnails or other segments.
    SegmentWalk,
}

/// Signature gate applied when a carrier is loaded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignaturePolicy {
    /// Rejects only when the file neither starts with `FF D8` nor ends with `FF D9`.
    #[default]
    Lenient,
    /// Requires a leading `FF D8` and an `FF D9` somewhere after it.
    Strict,
}

impl SignaturePolicy {
    pub fn accepts(self, data: &[u8]) -> bool {
        use crate::jpeg::{EOI, SOI};

        match self {
            SignaturePolicy::Lenient => data.starts_with(&SOI) || data.ends_with(&EOI),
            SignaturePolicy::Strict => {
                data.starts_with(&SOI) && crate::jpeg::first_eoi(&data[SOI.len()..]).is_some()
            }
        }
    }
}
