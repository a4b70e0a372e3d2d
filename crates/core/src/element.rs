//! Barcode field elements as handed over by the label parser.

use serde::{Deserialize, Serialize};

/// Field rotation (`^BC`/`^B3` parameter `o`). Passed through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldOrientation {
    /// `N`: normal.
    #[default]
    Normal,
    /// `R`: rotated 90 degrees clockwise.
    Rotated,
    /// `I`: inverted 180 degrees.
    Inverted,
    /// `B`: read from bottom up, 270 degrees.
    Bottom,
}

impl FieldOrientation {
    /// Parse a ZPL orientation letter (case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'N' => Some(FieldOrientation::Normal),
            'R' => Some(FieldOrientation::Rotated),
            'I' => Some(FieldOrientation::Inverted),
            'B' => Some(FieldOrientation::Bottom),
            _ => None,
        }
    }
}

/// Where and how a field is placed on the label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPlacement {
    /// X position in dots.
    pub x: f32,
    /// Y position in dots.
    pub y: f32,
    /// Whether the field was positioned with `^FO` (as opposed to `^FT`).
    pub has_field_origin: bool,
    /// Field rotation.
    pub orientation: FieldOrientation,
}

/// A `^BC` Code 128 field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code128Field {
    /// Raw field data; may contain `>` escapes.
    pub content: String,
    /// Mode flag (`N`, `A`, `D`, `U`); `None` or empty means `N`.
    pub mode: Option<String>,
    /// Narrow bar width in dots.
    pub module_width: f32,
    /// Requested symbol height in dots, interpretation line included.
    pub height: i32,
    /// Print the human-readable line.
    pub print_interpretation_line: bool,
    /// Print the human-readable line above the symbol instead of below.
    pub print_interpretation_line_above_code: bool,
    /// Position and rotation.
    pub placement: FieldPlacement,
}

/// A `^B3` Code 39 field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code39Field {
    /// Raw field data.
    pub content: String,
    /// Narrow bar width in dots.
    pub module_width: f32,
    /// Requested bar height in dots, interpretation line excluded.
    pub height: i32,
    /// Print the human-readable line.
    pub print_interpretation_line: bool,
    /// Print the human-readable line above the symbol instead of below.
    pub print_interpretation_line_above_code: bool,
    /// Position and rotation.
    pub placement: FieldPlacement,
}

/// A barcode field of any supported symbology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BarcodeElement {
    /// `^BC`.
    Code128(Code128Field),
    /// `^B3`.
    Code39(Code39Field),
}

impl BarcodeElement {
    /// Position and rotation of the field.
    pub fn placement(&self) -> &FieldPlacement {
        match self {
            BarcodeElement::Code128(f) => &f.placement,
            BarcodeElement::Code39(f) => &f.placement,
        }
    }

    /// Narrow bar width in dots.
    pub fn module_width(&self) -> f32 {
        match self {
            BarcodeElement::Code128(f) => f.module_width,
            BarcodeElement::Code39(f) => f.module_width,
        }
    }

    /// Requested height as given in the field.
    pub fn height(&self) -> i32 {
        match self {
            BarcodeElement::Code128(f) => f.height,
            BarcodeElement::Code39(f) => f.height,
        }
    }

    /// `(print_interpretation_line, print_interpretation_line_above_code)`.
    pub fn interpretation_line(&self) -> (bool, bool) {
        match self {
            BarcodeElement::Code128(f) => (
                f.print_interpretation_line,
                f.print_interpretation_line_above_code,
            ),
            BarcodeElement::Code39(f) => (
                f.print_interpretation_line,
                f.print_interpretation_line_above_code,
            ),
        }
    }
}

impl From<Code128Field> for BarcodeElement {
    fn from(field: Code128Field) -> Self {
        BarcodeElement::Code128(field)
    }
}

impl From<Code39Field> for BarcodeElement {
    fn from(field: Code39Field) -> Self {
        BarcodeElement::Code39(field)
    }
}
