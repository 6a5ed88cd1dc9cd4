//! castedit CLI: edit asciicast v2 recordings.
//!
//! Usage:
//!   castedit cut --start <S> --end <E> [FILE]     Remove a time range
//!   castedit quantize --range <R>... [FILE]       Cap pauses between events
//!   castedit speed --factor <F> [FILE]            Slow down or speed up
//!   castedit convert [FILE]                       Convert a v1 cast to v2
//!   castedit validate [FILE]                      Check a cast for errors
//!   castedit info [FILE]                          Show cast information
//!
//! Casts are read from stdin when FILE is omitted and written to stdout
//! unless `--out` is given.

use std::path::PathBuf;

use castedit_common::config::AppConfig;
use castedit_common::{CasteditError, CasteditResult};
use castedit_editor::QuantizeRange;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "castedit",
    about = "Edit asciinema terminal recordings",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Validate the cast before transforming it
    #[arg(long, global = true)]
    strict: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the frames between two timestamps (inclusive)
    ///
    /// Both timestamps must match recorded frames exactly. Frames after the
    /// removed range are moved back so playback continues without a gap.
    Cut {
        /// Initial frame timestamp
        #[arg(long, allow_negative_numbers = true)]
        start: f64,

        /// Final frame timestamp
        #[arg(long, allow_negative_numbers = true)]
        end: f64,

        /// File to write the modified cast to (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Cast to read (default: stdin)
        file: Option<PathBuf>,
    },

    /// Cap the delays between frames
    ///
    /// Every delay inside a range `from[,to]` becomes `from`. A range without
    /// an upper bound catches every longer delay, e.g. `--range 2` turns all
    /// pauses of two seconds or more into exactly two seconds.
    Quantize {
        /// Delay range `from[,to]` in seconds (repeatable)
        #[arg(long = "range", required = true, value_parser = parse_range)]
        ranges: Vec<QuantizeRange>,

        /// File to write the modified cast to (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Cast to read (default: stdin)
        file: Option<PathBuf>,
    },

    /// Multiply the delays in a range of frames by a factor
    ///
    /// A factor of 2 plays the range at half speed, 0.5 at double speed.
    /// Without `--start`/`--end` the whole cast is affected.
    Speed {
        /// Speed factor, between 0.1 and 10
        #[arg(long)]
        factor: f64,

        /// Initial frame timestamp (default: first frame)
        #[arg(long)]
        start: Option<f64>,

        /// Final frame timestamp (default: last frame)
        #[arg(long)]
        end: Option<f64>,

        /// File to write the modified cast to (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Cast to read (default: stdin)
        file: Option<PathBuf>,
    },

    /// Convert an asciicast v1 recording to v2
    Convert {
        /// File to write the converted cast to (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// v1 cast to read (default: stdin)
        file: Option<PathBuf>,
    },

    /// Check that a cast is well-formed
    Validate {
        /// Cast to read (default: stdin)
        file: Option<PathBuf>,
    },

    /// Show information about a cast
    Info {
        /// Print the information as JSON
        #[arg(long)]
        json: bool,

        /// Cast to read (default: stdin)
        file: Option<PathBuf>,
    },
}

fn parse_range(s: &str) -> Result<QuantizeRange, castedit_editor::EditError> {
    s.parse()
}

/// Apply command-line overrides to the loaded config.
///
/// A config that failed to load is replaced by the defaults; the error is
/// handed back so it can be logged once a subscriber is installed.
fn resolve_config(
    loaded: CasteditResult<AppConfig>,
    cli: &Cli,
) -> (AppConfig, Option<CasteditError>) {
    let (mut config, error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.log_json {
        config.logging.json = true;
    }
    (config, error)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = resolve_config(AppConfig::load(), &cli);
    castedit_common::logging::init_logging(&config.logging)?;
    if let Some(e) = config_error {
        tracing::warn!("Ignoring config: {e}");
    }

    let strict = cli.strict || config.editing.strict;

    match cli.command {
        Commands::Cut {
            start,
            end,
            out,
            file,
        } => commands::cut::run(start, end, file, out, strict),
        Commands::Quantize { ranges, out, file } => {
            commands::quantize::run(ranges, file, out, strict)
        }
        Commands::Speed {
            factor,
            start,
            end,
            out,
            file,
        } => commands::speed::run(factor, start, end, file, out, strict),
        Commands::Convert { out, file } => commands::convert::run(file, out),
        Commands::Validate { file } => commands::validate::run(file),
        Commands::Info { json, file } => commands::info::run(file, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quantize_requires_a_range() {
        assert!(Cli::try_parse_from(["castedit", "quantize", "demo.cast"]).is_err());

        let cli = Cli::try_parse_from([
            "castedit", "quantize", "--range", "0.3,1", "--range", "2", "demo.cast",
        ])
        .unwrap();
        match cli.command {
            Commands::Quantize { ranges, file, out } => {
                assert_eq!(ranges.len(), 2);
                assert!(ranges[1].is_unbounded());
                assert_eq!(file, Some(PathBuf::from("demo.cast")));
                assert_eq!(out, None);
            }
            _ => panic!("expected quantize"),
        }
    }

    #[test]
    fn test_malformed_range_is_a_usage_error() {
        assert!(Cli::try_parse_from(["castedit", "quantize", "--range", "2,1"]).is_err());
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults_with_flags() {
        let cli = Cli::try_parse_from(["castedit", "-v", "--log-json", "validate"]).unwrap();
        let (config, error) =
            resolve_config(Err(CasteditError::config("config.json: bad")), &cli);

        assert!(matches!(error, Some(CasteditError::Config { .. })));
        assert!(!config.editing.strict);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_loaded_config_is_kept() {
        let cli = Cli::try_parse_from(["castedit", "validate"]).unwrap();
        let mut loaded = AppConfig::default();
        loaded.editing.strict = true;
        loaded.logging.level = "info".to_string();

        let (config, error) = resolve_config(Ok(loaded.clone()), &cli);
        assert!(error.is_none());
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "castedit", "cut", "--start", "1", "--end", "2", "--strict", "-v",
        ])
        .unwrap();
        assert!(cli.strict);
        assert!(cli.verbose);
        assert!(!cli.log_json);
    }
}
