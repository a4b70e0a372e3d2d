//! Interpretation-line sizing and placement.

use serde::{Deserialize, Serialize};
use zpl_barcode_profile::{FontEntry, LabelFont, Profile};

use crate::symbology::Symbology;

/// Vertical font metrics at a concrete size.
///
/// `ascent` is measured upward from the baseline and is negative by
/// convention; `descent` is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Distance from baseline to the top of the tallest glyph (negative).
    pub ascent: f32,
    /// Distance from baseline to the bottom of the lowest glyph (positive).
    pub descent: f32,
}

/// Source of font metrics for the interpretation line.
///
/// Any `Fn(&str, f32) -> Result<FontMetrics, String>` is a provider, which
/// lets callers with a real font engine plug it in directly.
pub trait FontMetricsProvider {
    /// Metrics for logical font `font` at `size`.
    ///
    /// # Errors
    /// Returns a description of the failure when the font cannot be resolved.
    fn metrics(&self, font: &str, size: f32) -> Result<FontMetrics, String>;
}

impl<F> FontMetricsProvider for F
where
    F: Fn(&str, f32) -> Result<FontMetrics, String>,
{
    fn metrics(&self, font: &str, size: f32) -> Result<FontMetrics, String> {
        self(font, size)
    }
}

/// Font metrics from a profile's font table, scaled linearly with size.
#[derive(Debug, Clone, Default)]
pub struct StaticFontMetrics {
    fonts: Vec<FontEntry>,
}

impl StaticFontMetrics {
    /// Build a provider from explicit em-relative entries.
    pub fn new(fonts: Vec<FontEntry>) -> Self {
        Self { fonts }
    }

    /// Build a provider from a profile's `fonts` table.
    pub fn from_profile(profile: &Profile) -> Self {
        Self::new(profile.fonts.clone())
    }
}

impl FontMetricsProvider for StaticFontMetrics {
    fn metrics(&self, font: &str, size: f32) -> Result<FontMetrics, String> {
        let entry = self
            .fonts
            .iter()
            .find(|f| f.key == font)
            .ok_or_else(|| format!("no metrics for font '{font}'"))?;
        Ok(FontMetrics {
            ascent: entry.ascent * size,
            descent: entry.descent * size,
        })
    }
}

/// Font size for the interpretation line of a field with the given module
/// width: `min(module_width * scale, max_size)`.
pub fn label_font_size(module_width: f32, font: &LabelFont) -> f32 {
    (module_width * font.scale).min(font.max_size)
}

/// Height of the interpretation line and the vertical offset it imposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelLayout {
    /// Height reserved for the interpretation line (0 when not printed).
    pub label_height: i32,
    /// Offset applied above the symbol; equals `label_height` when the line
    /// is printed above the code, 0 otherwise.
    pub label_height_offset: i32,
}

/// Compute the interpretation-line layout for a symbology.
///
/// Code 128 measures the line as `ceil(descent - ascent)`; Code 39 as
/// `ceil(ascent + descent)`. Both round up and never go below zero, so with
/// the usual negative ascent a Code 39 line reserves no height.
pub fn label_layout(
    symbology: Symbology,
    metrics: FontMetrics,
    print_interpretation_line: bool,
    above_code: bool,
) -> LabelLayout {
    let label_height = if print_interpretation_line {
        let extent = if symbology.is_code128() {
            metrics.descent - metrics.ascent
        } else {
            metrics.ascent + metrics.descent
        };
        extent.ceil().max(0.0) as i32
    } else {
        0
    };
    LabelLayout {
        label_height,
        label_height_offset: if above_code { label_height } else { 0 },
    }
}
