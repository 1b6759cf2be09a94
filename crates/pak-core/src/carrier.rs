use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use image::{io::Reader as ImageReader, ImageFormat};
use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::jpeg::{find_eoi, EOI};
use crate::{CarrierOptions, PakError, PayloadKind, Result};

/// A JPEG file, fully buffered, that may carry a payload behind its
/// end-of-image marker.
///
/// Every operation works on what was on disk at [`Carrier::load`] time.
/// The mutating ones consume the carrier, load it again to continue.
pub struct Carrier {
    path: PathBuf,
    content: Vec<u8>,
    options: CarrierOptions,
}

/// Outcome of [`Carrier::extract`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted {
    /// The archive file that was written, extension included
    pub path: PathBuf,
    pub kind: PayloadKind,
    pub bytes: u64,
}

/// Layout of a carrier as reported by [`Carrier::inspect`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarrierReport {
    pub path: PathBuf,
    /// Total file size
    pub size: u64,
    /// Offset right behind the end-of-image marker
    pub payload_offset: u64,
    pub payload_size: u64,
    /// `None` for an empty carrier
    pub kind: Option<PayloadKind>,
    /// Width and height, if the image part can be decoded
    pub dimensions: Option<(u32, u32)>,
}

impl Carrier {
    /// Reads the whole file and applies the signature gate of `options`.
    pub fn load(path: impl AsRef<Path>, options: CarrierOptions) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            debug!("Cannot open carrier {path:?}: {e}");
            PakError::CarrierNotFound(path.to_path_buf())
        })?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|source| PakError::ReadError { source })?;

        if !options.signature.accepts(&content) {
            return Err(PakError::InvalidSignature(path.to_path_buf()));
        }
        debug!("Loaded carrier {path:?} with {} bytes", content.len());

        Ok(Self {
            path: path.to_path_buf(),
            content,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> CarrierOptions {
        self.options
    }

    /// Size of the buffered file in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Offset of the first byte behind the end-of-image marker.
    pub fn payload_offset(&self) -> Result<usize> {
        find_eoi(&self.content, self.options.scan)
            .map(|eoi| eoi + EOI.len())
            .ok_or_else(|| PakError::MalformedImage(self.path.clone()))
    }

    /// Everything behind the end-of-image marker, possibly nothing.
    pub fn payload(&self) -> Result<&[u8]> {
        let offset = self.payload_offset()?;
        Ok(&self.content[offset..])
    }

    /// True when no byte follows the end-of-image marker.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.payload()?.is_empty())
    }

    pub fn detect_kind(&self) -> Result<PayloadKind> {
        Ok(PayloadKind::detect(self.payload()?))
    }

    /// Appends the bytes of `payload_file` to the carrier file, returns how many.
    ///
    /// The carrier file is opened in append mode, the buffered content is not
    /// written back.
    pub fn inject(self, payload_file: impl AsRef<Path>) -> Result<u64> {
        let payload_file = payload_file.as_ref();
        let mut payload = File::open(payload_file).map_err(|e| {
            debug!("Cannot open payload {payload_file:?}: {e}");
            PakError::PayloadNotFound(payload_file.to_path_buf())
        })?;

        if !self.is_empty()? {
            return Err(PakError::AlreadyContainsPayload(self.path));
        }

        let mut head = Vec::with_capacity(4);
        (&mut payload)
            .take(4)
            .read_to_end(&mut head)
            .map_err(|source| PakError::ReadError { source })?;

        if PayloadKind::detect(&head) == PayloadKind::Unknown {
            warn!("{payload_file:?} is neither a ZIP nor a 7z archive, it will not be extractable");
        }

        info!("Writing {payload_file:?} into {:?}", self.path);
        let mut image = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| PakError::WriteError { source })?;
        image
            .write_all(&head)
            .map_err(|source| PakError::WriteError { source })?;
        let rest =
            io::copy(&mut payload, &mut image).map_err(|source| PakError::WriteError { source })?;

        Ok(head.len() as u64 + rest)
    }

    /// Copies the payload into `<output>.<ext>`, the carrier stays untouched.
    pub fn extract(&self, output: impl AsRef<Path>) -> Result<Extracted> {
        let payload = self.payload()?;
        if payload.is_empty() {
            return Err(PakError::EmptyPayload(self.path.clone()));
        }

        let kind = PayloadKind::detect(payload);
        let Some(ext) = kind.extension() else {
            return Err(PakError::UnrecognizedPayloadType(self.path.clone()));
        };

        let target = append_extension(output.as_ref(), ext);
        if self.is_same_file(&target)? {
            return Err(PakError::TargetIsCarrier(target));
        }
        info!(
            "Extracting {} bytes of data from {:?} into {target:?}",
            payload.len(),
            self.path
        );
        fs::write(&target, payload).map_err(|source| PakError::WriteError { source })?;

        Ok(Extracted {
            path: target,
            kind,
            bytes: payload.len() as u64,
        })
    }

    /// Cuts the carrier back to its image part, returns the number of bytes removed.
    ///
    /// The image part goes to a temporary file next to the carrier which then
    /// replaces it by rename, an interruption leaves the old file intact.
    pub fn clear(self) -> Result<u64> {
        let offset = self.payload_offset()?;
        let removed = self.content.len() - offset;
        if removed == 0 {
            return Err(PakError::EmptyPayload(self.path));
        }

        // resolve symlinks, the rename has to replace the real file
        let target =
            fs::canonicalize(&self.path).map_err(|source| PakError::ReadError { source })?;
        let permissions = fs::metadata(&target)
            .map_err(|source| PakError::ReadError { source })?
            .permissions();
        if permissions.readonly() {
            return Err(PakError::WriteError {
                source: io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("{target:?} is read-only"),
                ),
            });
        }
        // the readonly flag says nothing about ownership
        OpenOptions::new()
            .write(true)
            .open(&target)
            .map_err(|source| PakError::WriteError { source })?;
        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|source| PakError::WriteError { source })?;
        tmp.write_all(&self.content[..offset])
            .map_err(|source| PakError::WriteError { source })?;
        tmp.as_file()
            .sync_all()
            .map_err(|source| PakError::WriteError { source })?;
        fs::set_permissions(tmp.path(), permissions)
            .map_err(|source| PakError::WriteError { source })?;
        tmp.persist(&target)
            .map_err(|e| PakError::WriteError { source: e.error })?;

        info!("Removed {removed} bytes of data from {:?}", self.path);
        Ok(removed as u64)
    }

    /// True when `other` exists and resolves to the carrier file.
    fn is_same_file(&self, other: &Path) -> Result<bool> {
        if !other.exists() {
            return Ok(false);
        }
        let carrier =
            fs::canonicalize(&self.path).map_err(|source| PakError::ReadError { source })?;
        let other = fs::canonicalize(other).map_err(|source| PakError::ReadError { source })?;

        Ok(carrier == other)
    }

    /// Describes where the image ends and what follows it.
    pub fn inspect(&self) -> Result<CarrierReport> {
        let offset = self.payload_offset()?;
        let payload = &self.content[offset..];

        let image = Cursor::new(&self.content[..offset]);
        let dimensions = ImageReader::with_format(image, ImageFormat::Jpeg)
            .into_dimensions()
            .map_err(|e| debug!("Image part of {:?} does not decode: {e}", self.path))
            .ok();

        Ok(CarrierReport {
            path: self.path.clone(),
            size: self.content.len() as u64,
            payload_offset: offset as u64,
            payload_size: payload.len() as u64,
            kind: (!payload.is_empty()).then(|| PayloadKind::detect(payload)),
            dimensions,
        })
    }
}

impl fmt::Debug for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carrier")
            .field("path", &self.path)
            .field("size", &self.content.len())
            .field("options", &self.options)
            .finish()
    }
}

/// `out` + `zip` is `out.zip`, `out.tar` + `zip` is `out.tar.zip`.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
