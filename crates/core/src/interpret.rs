//! Field interpretation: content, symbology, and interpretation-line layout.

use std::sync::LazyLock;

use serde::Serialize;
use zpl_barcode_profile::Profile;

use crate::code128::{self, Code128Mode};
use crate::code39;
use crate::element::BarcodeElement;
use crate::error::InterpretError;
use crate::layout::{FontMetrics, FontMetricsProvider, LabelLayout, label_font_size, label_layout};
use crate::symbology::Symbology;

static DEFAULT_PROFILE: LazyLock<Profile> = LazyLock::new(Profile::default);

/// Encoder input and printed line derived from field data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldContent {
    /// Symbology the encoder must use.
    pub symbology: Symbology,
    /// Exact characters to encode; may contain FNC1.
    pub encodable_content: String,
    /// Human-readable line; never contains FNC1 or a start code.
    pub interpretation_label: String,
}

/// Everything an encoder and a canvas need to draw one barcode field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    /// Symbology the encoder must use.
    pub symbology: Symbology,
    /// Exact characters to encode; may contain FNC1.
    pub encodable_content: String,
    /// Human-readable line; never contains FNC1 or a start code.
    pub interpretation_label: String,
    /// Logical font of the interpretation line.
    pub label_font: String,
    /// Size of the interpretation-line font.
    pub label_font_size: f32,
    /// Height reserved for the interpretation line.
    pub label_height: i32,
    /// Offset above the symbol when the line is printed above the code.
    pub label_height_offset: i32,
    /// Symbol height handed to the encoder.
    ///
    /// Code 128 carves the line out of the requested height; Code 39 adds it
    /// on top.
    pub final_symbol_height: i32,
}

/// Interpret only the content of a field (no layout, no font lookup).
///
/// # Errors
/// [`InterpretError::UnknownMode`] when a Code 128 mode flag is unknown and
/// the profile rejects unknown modes.
pub fn interpret_content(
    element: &BarcodeElement,
    profile: Option<&Profile>,
) -> Result<FieldContent, InterpretError> {
    let profile = profile.unwrap_or(&DEFAULT_PROFILE);
    match element {
        BarcodeElement::Code128(field) => code128::interpret_content(
            &field.content,
            &Code128Mode::from_flag(field.mode.as_deref()),
            profile.unknown_mode,
        ),
        BarcodeElement::Code39(field) => Ok(code39::interpret_content(&field.content)),
    }
}

/// Interpret a field, looking up interpretation-line metrics from `fonts`.
///
/// The font requested is the profile's `label_font.key` at
/// `min(module_width * scale, max_size)`. When `profile` is `None` the
/// built-in defaults apply (font `"A"`, scale 7.2, cap 72).
///
/// # Errors
/// [`InterpretError::InvalidModuleWidth`] when the module width is not
/// positive (checked before `fonts` is consulted),
/// [`InterpretError::FontResolution`] when `fonts` cannot resolve the font,
/// and [`InterpretError::UnknownMode`] as for [`interpret_content`].
pub fn interpret<F>(
    element: &BarcodeElement,
    fonts: &F,
    profile: Option<&Profile>,
) -> Result<Interpretation, InterpretError>
where
    F: FontMetricsProvider + ?Sized,
{
    let profile = profile.unwrap_or(&DEFAULT_PROFILE);
    check_module_width(element)?;
    let font = &profile.label_font;
    let size = label_font_size(element.module_width(), font);
    let metrics = fonts
        .metrics(&font.key, size)
        .map_err(|reason| InterpretError::FontResolution {
            font: font.key.clone(),
            size,
            reason,
        })?;
    interpret_with_metrics(element, metrics, Some(profile))
}

/// Interpret a field with interpretation-line metrics already resolved.
///
/// `metrics` must be for the profile's label font at the size
/// [`label_font_size`] yields for this field.
///
/// # Errors
/// [`InterpretError::InvalidModuleWidth`] and [`InterpretError::UnknownMode`]
/// as for [`interpret`].
pub fn interpret_with_metrics(
    element: &BarcodeElement,
    metrics: FontMetrics,
    profile: Option<&Profile>,
) -> Result<Interpretation, InterpretError> {
    let profile = profile.unwrap_or(&DEFAULT_PROFILE);
    check_module_width(element)?;
    let content = interpret_content(element, Some(profile))?;

    let (print_line, above) = element.interpretation_line();
    let LabelLayout {
        label_height,
        label_height_offset,
    } = label_layout(content.symbology, metrics, print_line, above);

    let final_symbol_height = match element {
        BarcodeElement::Code128(field) => field.height - label_height,
        BarcodeElement::Code39(field) => field.height + label_height,
    };

    Ok(Interpretation {
        symbology: content.symbology,
        encodable_content: content.encodable_content,
        interpretation_label: content.interpretation_label,
        label_font: profile.label_font.key.clone(),
        label_font_size: label_font_size(element.module_width(), &profile.label_font),
        label_height,
        label_height_offset,
        final_symbol_height,
    })
}

fn check_module_width(element: &BarcodeElement) -> Result<(), InterpretError> {
    let module_width = element.module_width();
    // NaN fails the comparison too.
    if module_width > 0.0 {
        Ok(())
    } else {
        Err(InterpretError::InvalidModuleWidth { module_width })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Code39Field, Code128Field, FieldPlacement};

    fn code128(content: &str, mode: Option<&str>) -> BarcodeElement {
        Code128Field {
            content: content.into(),
            mode: mode.map(Into::into),
            module_width: 2.0,
            height: 100,
            print_interpretation_line: true,
            print_interpretation_line_above_code: false,
            placement: FieldPlacement::default(),
        }
        .into()
    }

    fn metrics() -> FontMetrics {
        FontMetrics {
            ascent: -13.2,
            descent: 3.1,
        }
    }

    #[test]
    fn code128_height_shrinks_by_label() {
        let r = interpret_with_metrics(&code128("ABC", None), metrics(), None).unwrap();
        assert_eq!(r.label_height, 17);
        assert_eq!(r.final_symbol_height, 83);
        assert_eq!(r.label_height_offset, 0);
        assert_eq!(r.label_font, "A");
    }

    #[test]
    fn code39_height_grows_by_label() {
        let el: BarcodeElement = Code39Field {
            content: "ABC".into(),
            module_width: 2.0,
            height: 100,
            print_interpretation_line: true,
            print_interpretation_line_above_code: true,
            placement: FieldPlacement::default(),
        }
        .into();
        let m = FontMetrics {
            ascent: 10.2,
            descent: 3.1,
        };
        let r = interpret_with_metrics(&el, m, None).unwrap();
        assert_eq!(r.symbology, Symbology::Code39Extended);
        assert_eq!(r.label_height, 14);
        assert_eq!(r.label_height_offset, 14);
        assert_eq!(r.final_symbol_height, 114);
        assert_eq!(r.interpretation_label, "*ABC*");
    }

    #[test]
    fn font_request_uses_derived_size() {
        let seen = std::cell::Cell::new(0.0f32);
        let fonts = |key: &str, size: f32| -> Result<FontMetrics, String> {
            assert_eq!(key, "A");
            seen.set(size);
            Ok(metrics())
        };
        interpret(&code128("1", None), &fonts, None).unwrap();
        assert!((seen.get() - 14.4).abs() < 1e-4);
    }

    #[test]
    fn non_positive_module_width_never_reaches_fonts() {
        let fonts = |_: &str, size: f32| -> Result<FontMetrics, String> {
            panic!("font requested at size {size}");
        };
        for width in [0.0, -2.0, f32::NAN] {
            let el = match code128("1", None) {
                BarcodeElement::Code128(mut f) => {
                    f.module_width = width;
                    BarcodeElement::Code128(f)
                }
                other => other,
            };
            let err = interpret(&el, &fonts, None).unwrap_err();
            assert!(
                matches!(err, InterpretError::InvalidModuleWidth { .. }),
                "width {width}: {err:?}"
            );
            assert!(interpret_with_metrics(&el, metrics(), None).is_err());
        }
    }

    #[test]
    fn font_failure_is_reported() {
        let fonts = |_: &str, _: f32| -> Result<FontMetrics, String> { Err("gone".into()) };
        let err = interpret(&code128("1", None), &fonts, None).unwrap_err();
        assert!(matches!(
            err,
            InterpretError::FontResolution { ref font, ref reason, .. } if font == "A" && reason == "gone"
        ));
    }
}
