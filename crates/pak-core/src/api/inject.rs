use std::path::{Path, PathBuf};

use crate::{Carrier, CarrierOptions, PakError};

pub fn prepare() -> InjectApi {
    InjectApi::default()
}

#[derive(Default, Debug)]
pub struct InjectApi {
    payload: Option<PathBuf>,
    image: Option<PathBuf>,
    options: CarrierOptions,
}

impl InjectApi {
    /// Use the given carrier options
    pub fn with_options(mut self, options: CarrierOptions) -> Self {
        self.options = options;
        self
    }

    /// The archive that gets hidden
    pub fn with_payload<A: AsRef<Path>>(mut self, payload: A) -> Self {
        self.payload = Some(payload.as_ref().to_path_buf());
        self
    }

    /// The JPEG image that receives the archive, it is modified in place
    pub fn into_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Returns the number of bytes appended to the image
    pub fn execute(self) -> Result<u64, PakError> {
        let Some(payload) = self.payload else {
            return Err(PakError::PayloadNotSet);
        };
        let Some(image) = self.image else {
            return Err(PakError::CarrierNotSet);
        };

        Carrier::load(image, self.options)?.inject(payload)
    }
}
