use std::path::PathBuf;

use clap::Args;
use pak_core::CarrierOptions;

use crate::CliResult;

/// Extracts a hidden archive from a JPEG image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// JPEG image that contains the archive, used readonly
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Name of the archive to write, ".zip" or ".7z" is appended [default: extracted]
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn run(self, options: CarrierOptions, verbose: bool) -> CliResult<()> {
        let mut api = pak_core::api::extract::prepare()
            .with_options(options)
            .from_image(&self.source);
        if let Some(dest) = &self.dest {
            api = api.into_file(dest);
        }

        let extracted = api.execute()?;

        if verbose {
            println!(
                "Extracted {} bytes of data into '{}' successfully!",
                extracted.bytes,
                extracted.path.display()
            );
        }

        Ok(())
    }
}
