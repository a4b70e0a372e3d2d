//! Code 128 (`^BC`) content interpretation.
//!
//! Turns raw field data plus the `^BC` mode flag into the encoder input and
//! the human-readable line:
//!
//! | mode | symbology | encoded content | printed line |
//! |---|---|---|---|
//! | `N` / empty | from start code, else subset B | `>8` → FNC1 | `>8` removed |
//! | `A` | automatic subset | unchanged | unchanged |
//! | `D` | subset C | `>8` → FNC1, leading FNC1 guaranteed | `>8` removed |
//! | `U` | subset C | FNC1 + 19 digits + check digit | content + check digit |
//!
//! Stray start codes are deleted before any of this happens, and the printed
//! line is always scrubbed of FNC1 and start codes.

use serde::Serialize;
use zpl_barcode_profile::UnknownModePolicy;

use crate::checksum::{pad_ucc_case_data, ucc_case_check_digit};
use crate::error::InterpretError;
use crate::escape::{
    FNC1, resolve_start_code, scrub_label, strip_fnc1_escapes, strip_stray_start_codes,
    substitute_fnc1,
};
use crate::interpret::FieldContent;
use crate::symbology::Symbology;

/// The `^BC` mode parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Code128Mode {
    /// `N` or absent: start codes and `>8` escapes are honored.
    NoMode,
    /// `A`: the encoder picks subsets; content is taken literally.
    Automatic,
    /// `D`: UCC/EAN (GS1-128) data with a guaranteed leading FNC1.
    UccEan,
    /// `U`: UCC case mode, 19 digits plus a mod-10 check digit.
    UccCase,
    /// Any other flag, kept verbatim.
    Unknown(String),
}

impl Code128Mode {
    /// Parse a mode flag. Surrounding whitespace is ignored; an absent or
    /// empty flag means [`Code128Mode::NoMode`]. Matching is case-sensitive.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            None | Some("") | Some("N") => Code128Mode::NoMode,
            Some("A") => Code128Mode::Automatic,
            Some("D") => Code128Mode::UccEan,
            Some("U") => Code128Mode::UccCase,
            Some(other) => Code128Mode::Unknown(other.to_string()),
        }
    }

    /// The single-letter flag for known modes.
    pub fn flag(&self) -> &str {
        match self {
            Code128Mode::NoMode => "N",
            Code128Mode::Automatic => "A",
            Code128Mode::UccEan => "D",
            Code128Mode::UccCase => "U",
            Code128Mode::Unknown(flag) => flag,
        }
    }
}

/// Interpret Code 128 field data under the given mode.
///
/// Only [`Code128Mode::Unknown`] combined with
/// [`UnknownModePolicy::Reject`] can fail.
pub fn interpret_content(
    content: &str,
    mode: &Code128Mode,
    unknown_mode: UnknownModePolicy,
) -> Result<FieldContent, InterpretError> {
    let content = strip_stray_start_codes(content);

    let mut out = match mode {
        Code128Mode::NoMode => no_mode(&content),
        Code128Mode::Automatic => FieldContent {
            symbology: Symbology::Code128Auto,
            encodable_content: content.to_string(),
            interpretation_label: content.to_string(),
        },
        Code128Mode::UccEan => ucc_ean(&content),
        Code128Mode::UccCase => ucc_case(&content),
        Code128Mode::Unknown(flag) => match unknown_mode {
            UnknownModePolicy::Normal => {
                tracing::warn!(mode = flag.as_str(), "unknown ^BC mode, using mode N");
                no_mode(&content)
            }
            UnknownModePolicy::Passthrough => {
                tracing::warn!(
                    mode = flag.as_str(),
                    "unknown ^BC mode, encoding content as subset B"
                );
                FieldContent {
                    symbology: Symbology::Code128B,
                    encodable_content: content.to_string(),
                    interpretation_label: content.to_string(),
                }
            }
            UnknownModePolicy::Reject => {
                return Err(InterpretError::UnknownMode { mode: flag.clone() });
            }
        },
    };

    if let std::borrow::Cow::Owned(label) = scrub_label(&out.interpretation_label) {
        out.interpretation_label = label;
    }

    tracing::debug!(
        mode = mode.flag(),
        symbology = %out.symbology,
        "interpreted Code 128 content"
    );
    Ok(out)
}

fn no_mode(content: &str) -> FieldContent {
    let (symbology, data) = match resolve_start_code(content) {
        Some((symbology, rest)) => {
            tracing::debug!(%symbology, "start code selects subset");
            (symbology, rest)
        }
        None => (Symbology::Code128B, content),
    };
    FieldContent {
        symbology,
        encodable_content: substitute_fnc1(data),
        interpretation_label: strip_fnc1_escapes(data),
    }
}

fn ucc_ean(content: &str) -> FieldContent {
    let mut encodable = substitute_fnc1(content);
    if !encodable.starts_with(FNC1) {
        encodable.insert(0, FNC1);
    }
    FieldContent {
        symbology: Symbology::Code128C,
        encodable_content: encodable,
        interpretation_label: strip_fnc1_escapes(content),
    }
}

fn ucc_case(content: &str) -> FieldContent {
    let data = pad_ucc_case_data(content);
    let check = ucc_case_check_digit(&data);
    FieldContent {
        symbology: Symbology::Code128C,
        encodable_content: format!("{FNC1}{data}{check}"),
        interpretation_label: format!("{content}{check}"),
    }
}
