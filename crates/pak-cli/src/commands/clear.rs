use std::path::PathBuf;

use clap::Args;
use pak_core::CarrierOptions;

use crate::CliResult;

/// Removes a hidden archive from a JPEG image
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// JPEG image to clean, modified in place
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,
}

impl ClearArgs {
    pub fn run(self, options: CarrierOptions) -> CliResult<()> {
        let removed = pak_core::api::clear::prepare()
            .with_options(options)
            .of_image(&self.image)
            .execute()?;

        println!("Cleaned {removed} bytes of data successfully!");

        Ok(())
    }
}
