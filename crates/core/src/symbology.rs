//! Barcode symbologies handed to the external symbol encoder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The symbology (and, for Code 128, the subset) the encoder must use.
///
/// Exactly one value is produced per interpreted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    /// Code 128 with the encoder choosing the subset per character run.
    Code128Auto,
    /// Code 128 subset A (control characters and uppercase).
    Code128A,
    /// Code 128 subset B (full printable ASCII).
    Code128B,
    /// Code 128 subset C (digit pairs).
    Code128C,
    /// Full-ASCII Code 39.
    Code39Extended,
}

impl Symbology {
    /// Whether this symbology belongs to the Code 128 family.
    pub fn is_code128(self) -> bool {
        match self {
            Symbology::Code128Auto
            | Symbology::Code128A
            | Symbology::Code128B
            | Symbology::Code128C => true,
            Symbology::Code39Extended => false,
        }
    }

    /// Stable identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Symbology::Code128Auto => "Code128Auto",
            Symbology::Code128A => "Code128A",
            Symbology::Code128B => "Code128B",
            Symbology::Code128C => "Code128C",
            Symbology::Code39Extended => "Code39Extended",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
