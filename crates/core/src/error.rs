//! Typed errors for interpretation and drawing.

use crate::symbology::Symbology;

/// Errors raised while interpreting a barcode field.
///
/// The content transformations themselves are total; these variants only
/// arise from configuration (`unknown_mode = "reject"`), from an unusable
/// module width, or from the external font-metrics provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpretError {
    /// The field's mode flag is not `N`, `A`, `D` or `U` and the active
    /// profile rejects unknown modes.
    #[error("unknown Code 128 mode '{mode}'")]
    UnknownMode {
        /// The mode flag as given.
        mode: String,
    },

    /// The field's module width is not a positive number, so no label font
    /// size can be derived from it.
    #[error("module width {module_width} must be > 0")]
    InvalidModuleWidth {
        /// The module width as given.
        module_width: f32,
    },

    /// The font-metrics provider could not resolve the interpretation-line font.
    #[error("font resolution failed for font '{font}' at size {size}: {reason}")]
    FontResolution {
        /// Logical font identifier that was requested.
        font: String,
        /// Requested font size.
        size: f32,
        /// Provider-supplied description of the failure.
        reason: String,
    },
}

/// Errors raised by [`draw_element`](crate::render::draw_element).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Interpretation failed before anything was encoded.
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    /// The symbol encoder rejected the content.
    #[error("encoding failed for {symbology}: {reason}")]
    Encoding {
        /// Symbology that was requested.
        symbology: Symbology,
        /// Encoder-supplied description of the failure.
        reason: String,
    },

    /// The encoded symbol could not be converted to image bytes.
    #[error("image conversion failed: {reason}")]
    Conversion {
        /// Description of the failure.
        reason: String,
    },

    /// The canvas refused the draw call.
    #[error("draw failed: {reason}")]
    Draw {
        /// Canvas-supplied description of the failure.
        reason: String,
    },
}

impl RenderError {
    /// Short machine-readable kind, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::Interpret(InterpretError::UnknownMode { .. }) => "unknown_mode",
            RenderError::Interpret(InterpretError::InvalidModuleWidth { .. }) => {
                "invalid_module_width"
            }
            RenderError::Interpret(InterpretError::FontResolution { .. }) => {
                "font_resolution_failed"
            }
            RenderError::Encoding { .. } => "encoding_failed",
            RenderError::Conversion { .. } => "conversion_failed",
            RenderError::Draw { .. } => "draw_failed",
        }
    }
}
