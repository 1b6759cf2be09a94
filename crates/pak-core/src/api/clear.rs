use std::path::{Path, PathBuf};

use crate::{Carrier, CarrierOptions, PakError};

pub fn prepare() -> ClearApi {
    ClearApi::default()
}

#[derive(Default, Debug)]
pub struct ClearApi {
    image: Option<PathBuf>,
    options: CarrierOptions,
}

impl ClearApi {
    pub fn with_options(mut self, options: CarrierOptions) -> Self {
        self.options = options;
        self
    }

    /// The image to strip, it is rewritten in place
    pub fn of_image(mut self, image: impl AsRef<Path>) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Returns the number of bytes removed
    pub fn execute(self) -> Result<u64, PakError> {
        let Some(image) = self.image else {
            return Err(PakError::CarrierNotSet);
        };

        Carrier::load(image, self.options)?.clear()
    }
}
