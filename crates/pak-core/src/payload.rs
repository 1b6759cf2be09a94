use std::fmt;

/// ZIP local file header signature.
pub const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Leading four bytes of the 7z signature `37 7A BC AF 27 1C`.
pub const SEVEN_ZIP_MAGIC: [u8; 4] = [0x37, 0x7A, 0xBC, 0xAF];

/// Archive format of a payload, judged by its leading magic bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    Zip,
    SevenZip,
    Unknown,
}

impl PayloadKind {
    /// Classifies the first four bytes of `data`, anything shorter is `Unknown`.
    pub fn detect(data: &[u8]) -> Self {
        match data.get(..4) {
            Some(head) if head == ZIP_MAGIC => PayloadKind::Zip,
            Some(head) if head == SEVEN_ZIP_MAGIC => PayloadKind::SevenZip,
            _ => PayloadKind::Unknown,
        }
    }

    /// File extension used when extracting, without the dot.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            PayloadKind::Zip => Some("zip"),
            PayloadKind::SevenZip => Some("7z"),
            PayloadKind::Unknown => None,
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Zip => write!(f, "ZIP archive"),
            PayloadKind::SevenZip => write!(f, "7z archive"),
            PayloadKind::Unknown => write!(f, "unknown"),
        }
    }
}
