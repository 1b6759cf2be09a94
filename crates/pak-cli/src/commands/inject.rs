use std::path::PathBuf;

use clap::Args;
use pak_core::CarrierOptions;

use crate::CliResult;

/// Hides a ZIP or 7z archive inside a JPEG image
#[derive(Args, Debug)]
pub struct InjectArgs {
    /// Archive to hide
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// JPEG image that receives the archive, modified in place
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,
}

impl InjectArgs {
    pub fn run(self, options: CarrierOptions, verbose: bool) -> CliResult<()> {
        let written = pak_core::api::inject::prepare()
            .with_options(options)
            .with_payload(&self.source)
            .into_image(&self.dest)
            .execute()?;

        if verbose {
            println!(
                "Wrote {written} bytes of data into {} successfully!",
                self.dest.display()
            );
        }

        Ok(())
    }
}
