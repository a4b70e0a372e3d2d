mod render;

use std::fs;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};
use zpl_barcode_core::checksum::{pad_ucc_case_data, ucc_case_check_digit};
use zpl_barcode_core::{
    BarcodeElement, Code39Field, Code128Field, FieldOrientation, FieldPlacement,
    StaticFontMetrics, interpret,
};
use zpl_barcode_profile::{Profile, load_profile_from_str};

use crate::render::{Format, print_check_digit, print_interpretation};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "zplbc",
    version,
    about = "Inspect how ZPL barcode fields are interpreted by a renderer"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Path to a render profile JSON. Built-in defaults apply when omitted.
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log verbosity: -v info, -vv debug, -vvv trace (otherwise RUST_LOG or warn).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Interpret a ^BC Code 128 field.
    Code128 {
        /// Field data (^FD content); may contain >9 >: >; >8 escapes.
        #[arg(allow_hyphen_values = true)]
        content: String,
        /// Mode flag: N, A, D or U.
        #[arg(long)]
        mode: Option<String>,
        #[command(flatten)]
        field: FieldArgs,
    },

    /// Interpret a ^B3 Code 39 field.
    Code39 {
        /// Field data (^FD content).
        #[arg(allow_hyphen_values = true)]
        content: String,
        #[command(flatten)]
        field: FieldArgs,
    },

    /// Compute the UCC case mode (^BC mode U) check digit.
    CheckDigit {
        /// Digits; padded with leading zeros or truncated to 19.
        digits: String,
    },

    /// Print the effective render profile as JSON.
    Profile,
}

/// Layout parameters shared by every barcode command.
#[derive(Args, Debug)]
struct FieldArgs {
    /// Module (narrow bar) width in dots (^BY w).
    #[arg(long, default_value_t = 2.0, value_parser = parse_module_width)]
    module_width: f32,
    /// Requested bar code height in dots.
    #[arg(long, default_value_t = 100)]
    height: i32,
    /// Print the interpretation line.
    #[arg(long, value_enum, ignore_case = true, default_value_t = YesNo::Y)]
    line: YesNo,
    /// Print the interpretation line above the code.
    #[arg(long, value_enum, ignore_case = true, default_value_t = YesNo::N)]
    above: YesNo,
    /// Field orientation: N, R, I or B.
    #[arg(long, default_value = "N", value_parser = parse_orientation)]
    orientation: FieldOrientation,
    /// X position in dots.
    #[arg(long, default_value_t = 0.0)]
    x: f32,
    /// Y position in dots.
    #[arg(long, default_value_t = 0.0)]
    y: f32,
    /// Position is a field origin (^FO) rather than a typeset position (^FT).
    #[arg(long)]
    origin: bool,
}

/// ZPL yes/no parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum YesNo {
    /// Yes.
    Y,
    /// No.
    N,
}

impl From<YesNo> for bool {
    fn from(v: YesNo) -> Self {
        v == YesNo::Y
    }
}

impl FieldArgs {
    fn placement(&self) -> FieldPlacement {
        FieldPlacement {
            x: self.x,
            y: self.y,
            has_field_origin: self.origin,
            orientation: self.orientation,
        }
    }
}

fn parse_module_width(s: &str) -> Result<f32, String> {
    let width: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if width > 0.0 {
        Ok(width)
    } else {
        Err(format!("{s} must be > 0"))
    }
}

fn parse_orientation(s: &str) -> Result<FieldOrientation, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => FieldOrientation::from_code(c),
        _ => None,
    }
    .ok_or_else(|| format!("'{s}' is not one of N, R, I, B"))
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = Format::resolve_or_detect(cli.output.as_deref());
    let profile = load_profile(cli.profile.as_deref())?;

    match cli.cmd {
        Cmd::Code128 {
            content,
            mode,
            field,
        } => {
            let element = BarcodeElement::Code128(Code128Field {
                content,
                mode,
                module_width: field.module_width,
                height: field.height,
                print_interpretation_line: field.line.into(),
                print_interpretation_line_above_code: field.above.into(),
                placement: field.placement(),
            });
            cmd_interpret(&element, &profile, format)?
        }
        Cmd::Code39 { content, field } => {
            let element = BarcodeElement::Code39(Code39Field {
                content,
                module_width: field.module_width,
                height: field.height,
                print_interpretation_line: field.line.into(),
                print_interpretation_line_above_code: field.above.into(),
                placement: field.placement(),
            });
            cmd_interpret(&element, &profile, format)?
        }
        Cmd::CheckDigit { digits } => cmd_check_digit(&digits, format)?,
        Cmd::Profile => println!("{}", serde_json::to_string_pretty(&profile)?),
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_interpret(element: &BarcodeElement, profile: &Profile, format: Format) -> Result<()> {
    let fonts = StaticFontMetrics::from_profile(profile);
    let interpretation =
        interpret(element, &fonts, Some(profile)).context("failed to interpret field")?;
    print_interpretation(&interpretation, format)
}

fn cmd_check_digit(digits: &str, format: Format) -> Result<()> {
    let data = pad_ucc_case_data(digits);
    let check = ucc_case_check_digit(&data);
    print_check_digit(&data, check, format)
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load and validate the profile at `path`, or the built-in defaults.
fn load_profile(path: Option<&str>) -> Result<Profile> {
    let Some(path) = path else {
        return Ok(Profile::default());
    };
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read profile '{path}'"))?;
    let profile =
        load_profile_from_str(&json).with_context(|| format!("invalid profile '{path}'"))?;
    tracing::info!(id = profile.id.as_str(), "loaded profile");
    Ok(profile)
}
