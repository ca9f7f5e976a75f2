//! TailShade CLI - Command-line interface for Tailwind palette generation

pub mod build_info;
pub mod export;
pub mod generate;
pub mod report;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub use build_info::BuildInfo;

use crate::color::{Hsl, Rgb, hex_to_rgb};

const EXAMPLES: &str = "\
Examples:
  tailshade '#3B82F6'                   # Generate palette in hex format
  tailshade 3B82F6 -c rgb               # Generate palette in RGB format
  tailshade '#3B82F6' -o palette.json   # Export to JSON file";

/// Output format for colors in the terminal report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorFormat {
    #[default]
    Hex,
    Hsl,
    Rgb,
}

#[derive(Parser, Debug)]
#[command(name = "tailshade")]
#[command(about = "Generate a Tailwind CSS shade palette from a base color", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Hex color code (e.g. #FF5733, FF5733 or F53)
    #[arg(value_name = "HEX_COLOR", required_unless_present = "version")]
    pub color: Option<String>,

    /// Color format: hex, hsl, or rgb
    #[arg(
        short = 'c',
        long = "color-format",
        value_enum,
        ignore_case = true,
        default_value_t = ColorFormat::Hex
    )]
    pub format: ColorFormat,

    /// Path to output JSON file (prints to the terminal if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print version information and exit
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// A parsed color in every representation the CLI prints.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorInfo {
    /// Canonical `#RRGGBB`
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl ColorInfo {
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        let rgb = hex_to_rgb(hex)?;
        Ok(Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: Hsl::from(rgb),
        })
    }
}

/// Process exit status for success, including `--help`.
pub const EXIT_OK: u8 = 0;
/// Process exit status for any failure, including argument errors.
pub const EXIT_ERROR: u8 = 1;

/// Run the `TailShade` CLI on the process arguments
pub fn run_cli(build_info: &BuildInfo) -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_error_exit_code(&err));
        }
    };

    let stdout = std::io::stdout();
    match run(&cli, build_info, &mut stdout.lock()) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Exit status for an argument parsing outcome. Help output is not an error.
#[must_use]
pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { EXIT_ERROR } else { EXIT_OK }
}

/// Execute parsed arguments, writing the report or banner to `out`.
pub fn run<W: Write>(cli: &Cli, build_info: &BuildInfo, out: &mut W) -> anyhow::Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    if cli.version {
        writeln!(out, "tailshade {}", build_info.summary())?;
        return Ok(());
    }

    let color = cli.color.as_deref().context("missing hex color argument")?;
    let use_color = !cli.no_color && console::colors_enabled();

    generate::execute(out, color, cli.format, cli.output.as_deref(), use_color)
}

/// Logs go to stderr so the report on stdout stays pipeable.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
