use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PakError {
    /// Represents a carrier image that does not exist or cannot be opened
    #[error("The file {0:?} does not exist or cannot be opened")]
    CarrierNotFound(PathBuf),

    /// Represents a carrier that fails the JPEG signature check
    #[error("The file {0:?} is not a valid JPEG")]
    InvalidSignature(PathBuf),

    /// Represents a carrier without a locatable end-of-image marker
    #[error("The image {0:?} has no end-of-image marker")]
    MalformedImage(PathBuf),

    /// Represents a payload file that does not exist or cannot be opened
    #[error("The payload file {0:?} does not exist or cannot be opened")]
    PayloadNotFound(PathBuf),

    /// Represents an inject into a carrier that already holds data
    #[error("The image {0:?} already contains injected data")]
    AlreadyContainsPayload(PathBuf),

    /// Represents an extract or clear on a carrier without data
    #[error("The image {0:?} is empty")]
    EmptyPayload(PathBuf),

    /// Represents a payload whose leading bytes match no known archive format
    #[error("The data in {0:?} is neither a ZIP nor a 7z archive")]
    UnrecognizedPayloadType(PathBuf),

    /// Represents an extract target that resolves to the carrier itself
    #[error("The target {0:?} is the carrier image itself")]
    TargetIsCarrier(PathBuf),

    /// Represents a failure to read from input.
    #[error("Read error: {source}")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error: {source}")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No payload file set")]
    PayloadNotSet,

    #[error("No target file set")]
    TargetNotSet,
}

impl PakError {
    /// Process exit code for this error, distinct per kind.
    ///
    /// `2` is left out, command line parsers use it for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            PakError::CarrierNotSet | PakError::PayloadNotSet | PakError::TargetNotSet => 1,
            PakError::CarrierNotFound(_) => 3,
            PakError::InvalidSignature(_) => 4,
            PakError::MalformedImage(_) => 5,
            PakError::PayloadNotFound(_) => 6,
            PakError::AlreadyContainsPayload(_) => 7,
            PakError::EmptyPayload(_) => 8,
            PakError::UnrecognizedPayloadType(_) => 9,
            PakError::ReadError { .. } | PakError::WriteError { .. } | PakError::IoError(_) => 10,
            PakError::TargetIsCarrier(_) => 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let p = PathBuf::from("a.jpg");
        let codes = [
            PakError::CarrierNotFound(p.clone()).exit_code(),
            PakError::InvalidSignature(p.clone()).exit_code(),
            PakError::MalformedImage(p.clone()).exit_code(),
            PakError::PayloadNotFound(p.clone()).exit_code(),
            PakError::AlreadyContainsPayload(p.clone()).exit_code(),
            PakError::EmptyPayload(p.clone()).exit_code(),
            PakError::UnrecognizedPayloadType(p.clone()).exit_code(),
            PakError::TargetIsCarrier(p).exit_code(),
        ];

        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            assert_ne!(*a, 2);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn io_failures_share_one_code() {
        let read = PakError::ReadError {
            source: std::io::Error::other("boom"),
        };
        let io: PakError = std::io::Error::other("boom").into();

        assert_eq!(read.exit_code(), io.exit_code());
    }

    #[test]
    fn io_failures_show_their_cause() {
        let write = PakError::WriteError {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        };

        assert_eq!(write.to_string(), "Write error: Permission denied");
    }
}
