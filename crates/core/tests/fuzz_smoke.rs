//! Fuzz smoke tests for barcode field interpretation.
//!
//! These tests feed random, escape-heavy, and edge-case field data through
//! every mode and verify interpretation never panics and that the structural
//! invariants hold on every result.
//!
//! No external crate dependencies are used — a simple deterministic PRNG
//! provides reproducible randomness.

mod common;

use common::{FONTS, code39, code128, has_start_code};
use zpl_barcode_core::checksum::UCC_CASE_DATA_LEN;
use zpl_barcode_core::escape::strip_stray_start_codes;
use zpl_barcode_core::{FNC1, Interpretation, Symbology, interpret};

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range(&mut self, max: usize) -> usize {
        (self.next() as usize) % max
    }

    /// Field data built from escape fragments, digits, and letters.
    fn gen_field(&mut self, max_parts: usize) -> String {
        const PARTS: &[&str] = &[
            ">9", ">:", ">;", ">8", ">", "9", ":", ";", "8", "0", "1", "5", "A", "z", "*", " ",
            "é", "\u{C8}",
        ];
        let n = self.gen_range(max_parts + 1);
        (0..n)
            .map(|_| PARTS[self.gen_range(PARTS.len())])
            .collect()
    }

    fn gen_digits(&mut self, max_len: usize) -> String {
        let n = self.gen_range(max_len + 1);
        (0..n)
            .map(|_| char::from(b'0' + self.gen_range(10) as u8))
            .collect()
    }
}

// ─── Invariant checking ─────────────────────────────────────────────────────

const MODES: [Option<&str>; 7] = [None, Some(""), Some("N"), Some("A"), Some("D"), Some("U"), Some("Q")];

/// Assert the invariants every Code 128 interpretation must satisfy.
fn assert_invariants(r: &Interpretation, input: &str, mode: Option<&str>) {
    assert!(
        !r.interpretation_label.contains(FNC1),
        "label contains FNC1 for {input:?} mode {mode:?}: {:?}",
        r.interpretation_label
    );
    assert!(
        !has_start_code(&r.interpretation_label),
        "label contains a start code for {input:?} mode {mode:?}: {:?}",
        r.interpretation_label
    );
    assert!(r.symbology.is_code128());
    assert!(r.label_height >= 0);
    assert_eq!(r.final_symbol_height, 100 - r.label_height);

    match mode {
        Some("U") => {
            assert_eq!(r.symbology, Symbology::Code128C);
            assert_eq!(r.encodable_content.chars().count(), UCC_CASE_DATA_LEN + 2);
            assert!(r.encodable_content.starts_with(FNC1));
            let last = r.encodable_content.chars().last().unwrap();
            assert!(last.is_ascii_digit());
        }
        Some("D") => {
            assert_eq!(r.symbology, Symbology::Code128C);
            assert!(r.encodable_content.starts_with(FNC1));
        }
        Some("A") => assert_eq!(r.symbology, Symbology::Code128Auto),
        _ => {}
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Normalizer properties
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn normalizer_leaves_no_stray_start_codes() {
    let mut rng = SimpleRng::new(0xDEAD_BEEF);
    for _ in 0..2000 {
        let input = rng.gen_field(12);
        let out = strip_stray_start_codes(&input);
        let tail = out.char_indices().nth(1).map_or("", |(i, _)| &out[i..]);
        assert!(
            !has_start_code(tail),
            "stray start code survived in {out:?} (input {input:?})"
        );
    }
}

#[test]
fn normalizer_is_idempotent() {
    let mut rng = SimpleRng::new(0x5EED);
    for _ in 0..2000 {
        let input = rng.gen_field(12);
        let once = strip_stray_start_codes(&input).into_owned();
        let twice = strip_stray_start_codes(&once);
        assert_eq!(once, twice, "input {input:?}");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Code 128 across every mode
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn code128_random_fields_hold_invariants() {
    let mut rng = SimpleRng::new(0xC0DE_128);
    for _ in 0..1000 {
        let input = rng.gen_field(16);
        for mode in MODES {
            let r = interpret(&code128(&input, mode), &*FONTS, None).unwrap();
            assert_invariants(&r, &input, mode);
        }
    }
}

#[test]
fn code128_edge_cases_hold_invariants() {
    let cases = [
        "", ">", ">>", ">9", ">:", ">;", ">8", ">8>8", ">9>9>9", "A>>9:", ">>99", "\u{C8}",
        "\u{C8}>8", "12345678901234567890123456789",
    ];
    for input in cases {
        for mode in MODES {
            let r = interpret(&code128(input, mode), &*FONTS, None).unwrap();
            assert_invariants(&r, input, mode);
        }
    }
}

#[test]
fn mode_u_digits_match_reference_checksum() {
    let mut rng = SimpleRng::new(0x19);
    for _ in 0..500 {
        let digits = rng.gen_digits(25);
        let r = interpret(&code128(&digits, Some("U")), &*FONTS, None).unwrap();

        let padded: String = format!("{digits:0>19}").chars().take(19).collect();
        let sum: u32 = padded
            .bytes()
            .enumerate()
            .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 7 } else { 9 })
            .sum();
        let check = char::from(b'0' + (sum % 10) as u8);

        let mut expected = String::new();
        expected.push(FNC1);
        expected.push_str(&padded);
        expected.push(check);
        assert_eq!(r.encodable_content, expected, "digits {digits:?}");
        assert_eq!(r.interpretation_label, format!("{digits}{check}"));
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Code 39
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn code39_label_is_always_single_delimited() {
    let mut rng = SimpleRng::new(0x39);
    for _ in 0..1000 {
        let input = rng.gen_field(10);
        let r = interpret(&code39(&input), &*FONTS, None).unwrap();
        assert_eq!(r.encodable_content, input);
        let label = &r.interpretation_label;
        assert!(label.starts_with('*') && label.ends_with('*') && label.len() >= 2);
        let inner = &label[1..label.len() - 1];
        assert!(!inner.starts_with('*') && !inner.ends_with('*'), "{label:?}");

        let again = interpret(&code39(label), &*FONTS, None).unwrap();
        assert_eq!(&again.interpretation_label, label);
    }
}
