//! Escape sequences recognized inside Code 128 field data.
//!
//! Two kinds of `>`-prefixed escapes matter here:
//!
//! - Start codes `>9`, `>:` and `>;` select subset A, B or C. They are only
//!   meaningful as the first two characters of the field; anywhere else they
//!   are an invalid invocation and are deleted.
//! - `>8` stands for the FNC1 function code that marks GS1 application
//!   identifiers. It becomes [`FNC1`] in the encoded data and disappears from
//!   the human-readable line.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::symbology::Symbology;

/// FNC1 as the Code 128 encoder's alphabet expects it (ordinal 200).
pub const FNC1: char = '\u{00C8}';

/// [`FNC1`] as a string slice, for substitutions.
pub const FNC1_STR: &str = "\u{00C8}";

/// The escape that stands for [`FNC1`] in field data.
pub const FNC1_ESCAPE: &str = ">8";

/// Start-code escapes and the Code 128 subset each one selects.
pub const START_CODES: [(&str, Symbology); 3] = [
    (">9", Symbology::Code128A),
    (">:", Symbology::Code128B),
    (">;", Symbology::Code128C),
];

static LEADING_START_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>[9:;]").expect("leading start code pattern is valid"));

static ANY_START_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">[9:;]").expect("start code pattern is valid"));

/// Map a two-character start-code escape to the subset it selects.
pub fn start_code_symbology(token: &str) -> Option<Symbology> {
    START_CODES
        .iter()
        .find(|(t, _)| *t == token)
        .map(|&(_, symbology)| symbology)
}

/// Delete every start code that does not sit at index 0.
///
/// A leading start code is left untouched. Removal is repeated until no
/// non-leading start code remains, so deleting one occurrence can never leave
/// a freshly joined one behind (`"A>>9:"` becomes `"A"`, not `"A>:"`).
/// Running this on its own output is therefore a no-op.
pub fn strip_stray_start_codes(content: &str) -> Cow<'_, str> {
    let Some(mut current) = remove_start_codes(content, true) else {
        return Cow::Borrowed(content);
    };
    while let Some(next) = remove_start_codes(&current, true) {
        current = next;
    }
    tracing::debug!(
        before = content,
        after = current.as_str(),
        "removed stray start codes"
    );
    Cow::Owned(current)
}

/// Split a leading start code off `content`.
///
/// Returns the selected subset and the remainder, or `None` when the content
/// does not begin with a start code.
pub fn resolve_start_code(content: &str) -> Option<(Symbology, &str)> {
    let m = LEADING_START_CODE.find(content)?;
    let symbology = start_code_symbology(m.as_str())?;
    Some((symbology, &content[m.end()..]))
}

/// Replace every `>8` escape with [`FNC1`].
pub fn substitute_fnc1(content: &str) -> String {
    content.replace(FNC1_ESCAPE, FNC1_STR)
}

/// Drop every `>8` escape; FNC1 is never printed.
pub fn strip_fnc1_escapes(content: &str) -> String {
    content.replace(FNC1_ESCAPE, "")
}

/// Make a human-readable line printable: no [`FNC1`] and no start code at
/// any position.
pub fn scrub_label(label: &str) -> Cow<'_, str> {
    let mut current: Cow<'_, str> = if label.contains(FNC1) {
        Cow::Owned(label.replace(FNC1, ""))
    } else {
        Cow::Borrowed(label)
    };
    while let Some(next) = remove_start_codes(&current, false) {
        current = Cow::Owned(next);
    }
    current
}

/// One removal pass. Returns `None` when nothing was removed.
fn remove_start_codes(content: &str, keep_leading: bool) -> Option<String> {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for m in ANY_START_CODE
        .find_iter(content)
        .filter(|m| !keep_leading || m.start() > 0)
    {
        out.push_str(&content[last..m.start()]);
        last = m.end();
    }
    if last == 0 {
        return None;
    }
    out.push_str(&content[last..]);
    Some(out)
}
