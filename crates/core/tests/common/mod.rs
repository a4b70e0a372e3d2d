//! Shared test helpers for `zpl_barcode_core` integration tests.

#![allow(unreachable_pub)]

use std::sync::LazyLock;
use zpl_barcode_core::{
    BarcodeElement, Code39Field, Code128Field, FNC1, FieldPlacement, FontMetrics,
    StaticFontMetrics,
};
use zpl_barcode_profile::Profile;

/// Font metrics from the default profile, built once per test binary.
pub static FONTS: LazyLock<StaticFontMetrics> =
    LazyLock::new(|| StaticFontMetrics::from_profile(&Profile::default()));

// ─── Element builders ────────────────────────────────────────────────────────

/// A Code 128 field with a printed line below the symbol.
#[allow(dead_code)]
pub fn code128(content: &str, mode: Option<&str>) -> BarcodeElement {
    BarcodeElement::Code128(Code128Field {
        content: content.to_string(),
        mode: mode.map(str::to_string),
        module_width: 2.0,
        height: 100,
        print_interpretation_line: true,
        print_interpretation_line_above_code: false,
        placement: FieldPlacement::default(),
    })
}

/// A Code 39 field with a printed line below the symbol.
#[allow(dead_code)]
pub fn code39(content: &str) -> BarcodeElement {
    BarcodeElement::Code39(Code39Field {
        content: content.to_string(),
        module_width: 2.0,
        height: 100,
        print_interpretation_line: true,
        print_interpretation_line_above_code: false,
        placement: FieldPlacement::default(),
    })
}

/// Fixed metrics provider that ignores the font key.
#[allow(dead_code)]
pub fn fixed_metrics(ascent: f32, descent: f32) -> impl Fn(&str, f32) -> Result<FontMetrics, String> {
    move |_: &str, _: f32| Ok(FontMetrics { ascent, descent })
}

// ─── Content helpers ─────────────────────────────────────────────────────────

/// `FNC1` followed by `rest`.
#[allow(dead_code)]
pub fn fnc1(rest: &str) -> String {
    format!("{FNC1}{rest}")
}

/// True when `s` contains any Code 128 start-code escape.
#[allow(dead_code)]
pub fn has_start_code(s: &str) -> bool {
    [">9", ">:", ">;"].iter().any(|t| s.contains(t))
}
