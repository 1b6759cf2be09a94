use std::path::PathBuf;

use clap::Args;
use pak_core::{CarrierOptions, CarrierReport};

use crate::CliResult;

/// Shows where the image ends and what is hidden behind it
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// JPEG image to look at, used readonly
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,
}

impl InspectArgs {
    pub fn run(self, options: CarrierOptions) -> CliResult<()> {
        let report = pak_core::api::inspect::prepare()
            .with_options(options)
            .of_image(&self.image)
            .execute()?;

        print!("{}", render(&report));

        Ok(())
    }
}

fn render(report: &CarrierReport) -> String {
    let dimensions = match report.dimensions {
        Some((w, h)) => format!("{w}x{h}"),
        None => "not decodable".to_string(),
    };
    let payload = match report.kind {
        Some(kind) => format!("{} bytes, {kind}", report.payload_size),
        None => "none".to_string(),
    };

    format!(
        "File:       {}\nSize:       {} bytes\nImage:      {} bytes, {dimensions}\nPayload:    {payload}\n",
        report.path.display(),
        report.size,
        report.payload_offset,
    )
}
