//! ZPL barcode field interpretation.
//!
//! Translates a `^BC` (Code 128) or `^B3` (Code 39) field into what a symbol
//! encoder and a canvas need: the symbology, the exact characters to encode
//! (FNC1 included), the human-readable line, and the interpretation-line
//! layout. The main entry points are [`interpret`] for interpretation and
//! [`draw_element`] for driving an external encoder and canvas.
//!
//! Everything here is a pure function of its inputs; interpretations may run
//! in parallel without coordination.

#![warn(missing_docs)]

/// Mod-10 check digit for UCC case mode.
pub mod checksum;
/// Code 128 content interpretation and `^BC` modes.
pub mod code128;
/// Code 39 content interpretation.
pub mod code39;
/// Barcode field elements.
pub mod element;
/// Interpretation and draw errors.
pub mod error;
/// Start-code and FNC1 escapes in Code 128 field data.
pub mod escape;
/// Field interpretation entry points.
pub mod interpret;
/// Interpretation-line font sizing and layout.
pub mod layout;
/// Encoder and canvas collaboration.
pub mod render;
/// Symbologies produced for the encoder.
pub mod symbology;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Elements
pub use element::{BarcodeElement, Code39Field, Code128Field, FieldOrientation, FieldPlacement};

// Interpretation
pub use code128::Code128Mode;
pub use interpret::{
    FieldContent, Interpretation, interpret, interpret_content, interpret_with_metrics,
};
pub use symbology::Symbology;

// Layout
pub use layout::{FontMetrics, FontMetricsProvider, LabelLayout, StaticFontMetrics};

// Rendering
pub use render::{Canvas, DrawRequest, EncodeRequest, EncodedSymbol, SymbolEncoder, draw_element};

// Errors
pub use error::{InterpretError, RenderError};

// Escapes
pub use escape::FNC1;

// Profile (re-exported from the profile crate)
pub use zpl_barcode_profile::{Profile, UnknownModePolicy};
