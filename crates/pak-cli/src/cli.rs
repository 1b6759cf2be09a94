use clap::{ArgAction, Parser, Subcommand};
use pak_core::{CarrierOptions, ScanMode, SignaturePolicy};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Operates verbosely, repeat for log output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only accept images that start with FF D8 and contain an FF D9 after it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Find the end of the image by walking its segments instead of taking the first FF D9
    #[arg(long, global = true)]
    pub segment_walk: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hides a ZIP or 7z archive inside a JPEG image
    Inject(inject::InjectArgs),
    /// Extracts a hidden archive from a JPEG image into DEST.zip or DEST.7z
    Extract(extract::ExtractArgs),
    /// Removes a hidden archive from a JPEG image
    Clear(clear::ClearArgs),
    /// Shows where the image ends and what is hidden behind it
    Inspect(inspect::InspectArgs),
}

impl CliArgs {
    pub fn options(&self) -> CarrierOptions {
        let mut options = CarrierOptions::default();
        if self.strict {
            options = options.with_signature(SignaturePolicy::Strict);
        }
        if self.segment_walk {
            options = options.with_scan(ScanMode::SegmentWalk);
        }
        options
    }

    pub fn run(self) -> CliResult<()> {
        let options = self.options();
        let verbose = self.verbose > 0;

        match self.command {
            Commands::Inject(args) => args.run(options, verbose),
            Commands::Extract(args) => args.run(options, verbose),
            Commands::Clear(args) => args.run(options),
            Commands::Inspect(args) => args.run(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn inject_takes_source_then_destination() {
        let args = CliArgs::try_parse_from(["pak", "inject", "p.zip", "a.jpg"]).unwrap();
        let Commands::Inject(cmd) = args.command else {
            panic!("expected inject");
        };
        assert_eq!(cmd.source, PathBuf::from("p.zip"));
        assert_eq!(cmd.dest, PathBuf::from("a.jpg"));
    }

    #[test]
    fn extract_target_is_optional() {
        let args = CliArgs::try_parse_from(["pak", "extract", "a.jpg"]).unwrap();
        let Commands::Extract(cmd) = args.command else {
            panic!("expected extract");
        };
        assert_eq!(cmd.dest, None);
    }

    #[test]
    fn global_flags_map_to_options() {
        let args = CliArgs::try_parse_from(["pak", "clear", "a.jpg", "--strict", "--segment-walk", "-vv"])
            .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(
            args.options(),
            CarrierOptions::default()
                .with_signature(SignaturePolicy::Strict)
                .with_scan(ScanMode::SegmentWalk)
        );

        let args = CliArgs::try_parse_from(["pak", "inspect", "a.jpg"]).unwrap();
        assert_eq!(args.options(), CarrierOptions::default());
    }

    #[test]
    fn a_mode_is_required() {
        assert!(CliArgs::try_parse_from(["pak"]).is_err());
        assert!(CliArgs::try_parse_from(["pak", "clear"]).is_err());
    }
}
