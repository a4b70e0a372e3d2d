//! Output rendering for interpretation results.
//!
//! Pretty output colours field names with ariadne and shows FNC1 as
//! `<FNC1>`; JSON output is the serialized result as-is.

use std::io::{self, IsTerminal};

use anyhow::Result;
use ariadne::{Color, Fmt};
use zpl_barcode_core::{FNC1, Interpretation};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, human-oriented output.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve an explicit choice, or pick based on whether stdout is a TTY.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

/// Make control characters in encodable content visible.
pub(crate) fn visible(content: &str) -> String {
    content.replace(FNC1, "<FNC1>")
}

fn key(name: &str) -> String {
    format!("{}", format!("{name:<14}").fg(Color::Cyan))
}

// ── Results ─────────────────────────────────────────────────────────────

/// Print an interpretation in the given format.
pub(crate) fn print_interpretation(r: &Interpretation, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(r)?),
        Format::Pretty => {
            println!("{}{}", key("symbology"), r.symbology);
            println!("{}{}", key("encode"), visible(&r.encodable_content));
            println!("{}{}", key("label"), r.interpretation_label);
            println!("{}{} @ {}", key("font"), r.label_font, r.label_font_size);
            println!(
                "{}{} (offset {})",
                key("label height"),
                r.label_height,
                r.label_height_offset
            );
            println!("{}{}", key("symbol height"), r.final_symbol_height);
        }
    }
    Ok(())
}

/// Print a UCC case mode check digit.
pub(crate) fn print_check_digit(data: &str, check: u8, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "data": data,
                "check_digit": check,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            println!("{data}{}", check.fg(Color::Green));
        }
    }
    Ok(())
}
