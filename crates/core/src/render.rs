//! Drawing a barcode field through an external encoder and canvas.
//!
//! This crate does not generate bars or touch pixels. [`draw_element`]
//! interprets the field, asks a [`SymbolEncoder`] for the symbol, converts it
//! to image bytes, and hands those to a [`Canvas`] together with the
//! placement parameters.

use zpl_barcode_profile::Profile;

use crate::element::{BarcodeElement, FieldOrientation};
use crate::error::RenderError;
use crate::interpret::{Interpretation, interpret};
use crate::layout::FontMetricsProvider;
use crate::symbology::Symbology;

/// Input for the symbol encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeRequest<'a> {
    /// Symbology (and subset) to encode with.
    pub symbology: Symbology,
    /// Characters to encode, FNC1 included.
    pub content: &'a str,
    /// Narrow bar width.
    pub bar_width: f32,
    /// Symbol height.
    pub height: i32,
    /// Whether the encoder should render the interpretation line.
    pub include_label: bool,
    /// Interpretation line text.
    pub label: &'a str,
    /// Logical font of the interpretation line.
    pub label_font: &'a str,
    /// Size of the interpretation-line font.
    pub label_font_size: f32,
}

impl<'a> EncodeRequest<'a> {
    /// Build the request for an interpreted field.
    pub fn new(element: &BarcodeElement, interpretation: &'a Interpretation) -> Self {
        Self {
            symbology: interpretation.symbology,
            content: &interpretation.encodable_content,
            bar_width: element.module_width(),
            height: interpretation.final_symbol_height,
            include_label: element.interpretation_line().0,
            label: &interpretation.interpretation_label,
            label_font: &interpretation.label_font,
            label_font_size: interpretation.label_font_size,
        }
    }
}

/// A rendered symbol owned by the caller until it is dropped.
pub trait EncodedSymbol {
    /// Width of the rendered symbol in dots.
    fn width(&self) -> u32;

    /// Convert the symbol to the image format the canvas consumes.
    ///
    /// # Errors
    /// Returns a description of the failure when conversion is impossible.
    fn to_image_bytes(&self) -> Result<Vec<u8>, String>;
}

/// External barcode encoding engine.
pub trait SymbolEncoder {
    /// Rendered symbol type.
    type Symbol: EncodedSymbol;

    /// Encode `request.content` as `request.symbology`.
    ///
    /// # Errors
    /// Returns a description of the failure, e.g. a character outside the
    /// symbology's alphabet.
    fn encode(&self, request: &EncodeRequest<'_>) -> Result<Self::Symbol, String>;
}

/// Placement parameters for drawing an encoded symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest<'a> {
    /// Encoded image bytes.
    pub image: &'a [u8],
    /// Height as requested in the field (before label adjustment).
    pub height: i32,
    /// Width of the encoded symbol.
    pub width: u32,
    /// Whether the field was positioned with `^FO`.
    pub has_field_origin: bool,
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Offset for an interpretation line printed above the symbol.
    pub label_height_offset: i32,
    /// Field rotation.
    pub orientation: FieldOrientation,
}

/// Drawing surface.
pub trait Canvas {
    /// Draw an encoded barcode image.
    ///
    /// # Errors
    /// Returns a description of the failure.
    fn draw_barcode(&mut self, request: &DrawRequest<'_>) -> Result<(), String>;
}

/// Interpret, encode, and draw one barcode field.
///
/// The encoded symbol lives only for the duration of this call and is
/// dropped on every path out of it, including conversion and draw failures.
///
/// # Errors
/// - [`RenderError::Interpret`] when interpretation fails (font resolution,
///   rejected mode).
/// - [`RenderError::Encoding`] when the encoder rejects the content.
/// - [`RenderError::Conversion`] / [`RenderError::Draw`] for the later steps.
pub fn draw_element<F, E, C>(
    element: &BarcodeElement,
    fonts: &F,
    encoder: &E,
    canvas: &mut C,
    profile: Option<&Profile>,
) -> Result<Interpretation, RenderError>
where
    F: FontMetricsProvider + ?Sized,
    E: SymbolEncoder + ?Sized,
    C: Canvas + ?Sized,
{
    let interpretation = interpret(element, fonts, profile)?;

    let request = EncodeRequest::new(element, &interpretation);
    let symbol = encoder
        .encode(&request)
        .map_err(|reason| RenderError::Encoding {
            symbology: interpretation.symbology,
            reason,
        })?;
    let image = symbol
        .to_image_bytes()
        .map_err(|reason| RenderError::Conversion { reason })?;

    let placement = element.placement();
    let draw = DrawRequest {
        image: &image,
        height: element.height(),
        width: symbol.width(),
        has_field_origin: placement.has_field_origin,
        x: placement.x,
        y: placement.y,
        label_height_offset: interpretation.label_height_offset,
        orientation: placement.orientation,
    };
    tracing::trace!(
        symbology = %interpretation.symbology,
        width = draw.width,
        height = draw.height,
        "drawing barcode"
    );
    canvas
        .draw_barcode(&draw)
        .map_err(|reason| RenderError::Draw { reason })?;

    Ok(interpretation)
}
