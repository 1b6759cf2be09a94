use std::path::{Path, PathBuf};

use crate::{Carrier, CarrierOptions, Extracted, PakError};

/// File name used when no target is given, the extension is appended to it
pub const DEFAULT_TARGET: &str = "extracted";

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    image: Option<PathBuf>,
    target: Option<PathBuf>,
    options: CarrierOptions,
}

impl ExtractApi {
    /// Use the given carrier options
    pub fn with_options(mut self, options: CarrierOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image that contains the archive, it is read only
    pub fn from_image(mut self, image: impl AsRef<Path>) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Name of the archive to write, `.zip` or `.7z` gets appended.
    /// Defaults to [`DEFAULT_TARGET`] in the working directory.
    pub fn into_file(mut self, target: impl AsRef<Path>) -> Self {
        self.target = Some(target.as_ref().to_path_buf());
        self
    }

    /// Execute the extraction and blocks until it is finished
    pub fn execute(self) -> Result<Extracted, PakError> {
        let Some(image) = self.image else {
            return Err(PakError::CarrierNotSet);
        };
        let target = self
            .target
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET));

        Carrier::load(image, self.options)?.extract(target)
    }
}

#[cfg(test)]
mod tests {
    use crate::PakError;

    #[test]
    fn should_require_an_image() {
        let err = crate::api::extract::prepare()
            .into_file("out")
            .execute()
            .unwrap_err();
        assert!(matches!(err, PakError::CarrierNotSet));
    }
}
