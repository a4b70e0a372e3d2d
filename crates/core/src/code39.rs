//! Code 39 (`^B3`) content interpretation.

use crate::interpret::FieldContent;
use crate::symbology::Symbology;

/// Code 39 start/stop delimiter.
pub const DELIMITER: char = '*';

/// Interpret Code 39 field data.
///
/// The content goes to the encoder unchanged. The printed line is the content
/// with any leading/trailing `*` trimmed and exactly one `*` put back on each
/// side, so an already-delimited line is reproduced as-is.
pub fn interpret_content(content: &str) -> FieldContent {
    FieldContent {
        symbology: Symbology::Code39Extended,
        encodable_content: content.to_string(),
        interpretation_label: format!(
            "{DELIMITER}{}{DELIMITER}",
            content.trim_matches(DELIMITER)
        ),
    }
}
