use std::path::{Path, PathBuf};

use crate::{Carrier, CarrierOptions, CarrierReport, PakError};

pub fn prepare() -> InspectApi {
    InspectApi::default()
}

#[derive(Default, Debug)]
pub struct InspectApi {
    image: Option<PathBuf>,
    options: CarrierOptions,
}

impl InspectApi {
    pub fn with_options(mut self, options: CarrierOptions) -> Self {
        self.options = options;
        self
    }

    pub fn of_image(mut self, image: impl AsRef<Path>) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<CarrierReport, PakError> {
        let Some(image) = self.image else {
            return Err(PakError::CarrierNotSet);
        };

        Carrier::load(image, self.options)?.inspect()
    }
}
