//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Generate rounded preview icons and macOS icon sets from source artwork
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: iconplate.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "iconplate.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a single rounded-corner preview icon
    #[command(visible_alias = "p")]
    Preview {
        #[command(flatten)]
        args: PreviewArgs,
    },

    /// Export a full macOS icon set with an inset plate
    #[command(visible_alias = "m")]
    Macos {
        #[command(flatten)]
        args: MacosArgs,
    },
}

/// Preview command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PreviewArgs {
    /// Source artwork (default: app-icon.png in the project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output PNG (default: icon-preview.png in the project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Canvas side in pixels (default: 1024)
    #[arg(short, long)]
    pub size: Option<u32>,
}

/// macOS icon set command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MacosArgs {
    /// Path to source image (PNG recommended)
    #[arg(value_name = "SOURCE", value_hint = clap::ValueHint::FilePath)]
    pub source: PathBuf,

    /// Output directory (default: ./icons)
    #[arg(value_name = "OUTPUT_DIR", value_hint = clap::ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Inset in pixels at 1024 scale (default: 128)
    #[arg(value_name = "INSET_PX", allow_negative_numbers = true)]
    pub inset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser, error::ErrorKind};

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_preview_takes_no_required_args() {
        let cli = Cli::try_parse_from(["iconplate", "preview"]).unwrap();
        let Commands::Preview { args } = cli.command else {
            unreachable!()
        };
        assert!(args.input.is_none() && args.output.is_none() && args.size.is_none());
    }

    #[test]
    fn test_macos_positionals() {
        let cli = Cli::try_parse_from(["iconplate", "macos", "logo.png", "./my-icons", "140"])
            .unwrap();
        let Commands::Macos { args } = cli.command else {
            unreachable!()
        };
        assert_eq!(args.source, PathBuf::from("logo.png"));
        assert_eq!(args.output_dir, Some(PathBuf::from("./my-icons")));
        assert_eq!(args.inset, Some(140));
    }

    #[test]
    fn test_macos_accepts_negative_inset() {
        let cli = Cli::try_parse_from(["iconplate", "m", "logo.png", "out", "-1"]).unwrap();
        let Commands::Macos { args } = cli.command else {
            unreachable!()
        };
        assert_eq!(args.inset, Some(-1));
    }

    #[test]
    fn test_macos_requires_source() {
        let err = Cli::try_parse_from(["iconplate", "macos"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["iconplate", "preview", "--verbose", "-C", "alt.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }
}
