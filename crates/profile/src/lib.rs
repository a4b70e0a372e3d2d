//! Render profile definitions and validation for ZPL barcode interpretation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating a render profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// JSON deserialization failed.
    #[error("invalid profile JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A required field value is out of its valid range.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The name of the field that failed validation.
        field: String,
        /// A human-readable explanation of why the field value is invalid.
        reason: String,
    },
}

/// Upper bound for the interpretation-line font size, in points.
pub const MAX_LABEL_FONT_SIZE: f32 = 72.0;

/// A render profile describing how barcode fields are interpreted for a
/// particular renderer: which logical font draws the interpretation line, how
/// that font is sized from the module width, the metrics the layout step
/// measures against, and what to do with unrecognized `^BC` mode flags.
///
/// # Example
/// ```
/// let profile = zpl_barcode_profile::Profile {
///     id: "viewer-default".into(),
///     schema_version: "1.0.0".into(),
///     ..Default::default()
/// };
/// assert_eq!(profile.label_font.key, "A");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Unique profile identifier (e.g., `"viewer-default"`).
    pub id: String,
    /// Profile schema version for forward compatibility (e.g., `"1.0.0"`).
    pub schema_version: String,
    /// Interpretation-line font selection and sizing.
    #[serde(default)]
    pub label_font: LabelFont,
    /// Em-relative metrics for the logical fonts this profile knows about.
    #[serde(default = "default_fonts")]
    pub fonts: Vec<FontEntry>,
    /// Handling of `^BC` mode flags outside `N`, `A`, `D`, `U`.
    #[serde(default)]
    pub unknown_mode: UnknownModePolicy,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: "default".into(),
            schema_version: "1.0.0".into(),
            label_font: LabelFont::default(),
            fonts: default_fonts(),
            unknown_mode: UnknownModePolicy::default(),
        }
    }
}

impl Profile {
    /// Look up the metrics entry for a logical font key.
    pub fn font(&self, key: &str) -> Option<&FontEntry> {
        self.fonts.iter().find(|f| f.key == key)
    }
}

/// Interpretation-line font settings.
///
/// The font size for a field is `min(module_width * scale, max_size)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelFont {
    /// Logical font identifier handed to the font-metrics provider.
    pub key: String,
    /// Multiplier applied to the module width to derive the font size.
    pub scale: f32,
    /// Largest font size the interpretation line may use.
    pub max_size: f32,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            key: "A".into(),
            scale: 7.2,
            max_size: MAX_LABEL_FONT_SIZE,
        }
    }
}

/// Em-relative vertical metrics for one logical font.
///
/// Follows the usual font-metrics sign convention: `ascent` is measured
/// upward from the baseline and is therefore negative (or zero), `descent`
/// is positive (or zero).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontEntry {
    /// Logical font identifier (e.g., `"A"`).
    pub key: String,
    /// Ascent per unit of font size.
    pub ascent: f32,
    /// Descent per unit of font size.
    pub descent: f32,
}

/// What to do when a Code 128 field carries a mode flag that is not one of
/// `N`, `A`, `D`, `U` (or empty).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownModePolicy {
    /// Interpret the field exactly as if mode `N` had been given.
    #[default]
    Normal,
    /// Encode the content as Code 128 subset B without start-code resolution
    /// or `>8` substitution.
    Passthrough,
    /// Refuse to interpret the field.
    Reject,
}

fn default_fonts() -> Vec<FontEntry> {
    // Monospace sans metrics (1901/2048 above, 483/2048 below the baseline).
    vec![FontEntry {
        key: "A".into(),
        ascent: -0.928,
        descent: 0.236,
    }]
}

/// Load and validate a [`Profile`] from a JSON string.
///
/// The `id` and `schema_version` fields are required; everything else falls
/// back to [`Profile::default`] values when omitted.
///
/// Performs structural validation after deserialization:
/// - `id` and `schema_version` must be non-empty
/// - `label_font.key` must be non-empty, `label_font.scale` must be > 0
/// - `label_font.max_size` must be in `(0, 72]`
/// - every `fonts[].key` must be non-empty and unique
/// - every font must have `ascent <= 0 <= descent`
/// - `label_font.key` must name an entry in `fonts`
pub fn load_profile_from_str(s: &str) -> Result<Profile, ProfileError> {
    let profile: Profile = serde_json::from_str(s)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Run the structural checks of [`load_profile_from_str`] on an in-memory profile.
pub fn validate_profile(profile: &Profile) -> Result<(), ProfileError> {
    // -- Required string field validation --
    if profile.id.trim().is_empty() {
        return Err(invalid("id", "must not be empty"));
    }
    if profile.schema_version.trim().is_empty() {
        return Err(invalid("schema_version", "must not be empty"));
    }

    // -- Label font validation --
    let lf = &profile.label_font;
    if lf.key.trim().is_empty() {
        return Err(invalid("label_font.key", "must not be empty"));
    }
    if lf.scale.is_nan() || lf.scale <= 0.0 {
        return Err(invalid(
            "label_font.scale",
            format!("{} must be > 0", lf.scale),
        ));
    }
    if lf.max_size.is_nan() || lf.max_size <= 0.0 || lf.max_size > MAX_LABEL_FONT_SIZE {
        return Err(invalid(
            "label_font.max_size",
            format!("{} must be in (0, {MAX_LABEL_FONT_SIZE}]", lf.max_size),
        ));
    }

    // -- Font table validation --
    for (i, font) in profile.fonts.iter().enumerate() {
        if font.key.trim().is_empty() {
            return Err(invalid(format!("fonts[{i}].key"), "must not be empty"));
        }
        if profile.fonts[..i].iter().any(|f| f.key == font.key) {
            return Err(invalid(
                format!("fonts[{i}].key"),
                format!("duplicate font key '{}'", font.key),
            ));
        }
        if font.ascent.is_nan() || font.ascent > 0.0 {
            return Err(invalid(
                format!("fonts[{i}].ascent"),
                format!("{} must be <= 0 (measured upward from the baseline)", font.ascent),
            ));
        }
        if font.descent.is_nan() || font.descent < 0.0 {
            return Err(invalid(
                format!("fonts[{i}].descent"),
                format!("{} must be >= 0", font.descent),
            ));
        }
    }

    if profile.font(&lf.key).is_none() {
        return Err(invalid(
            "label_font.key",
            format!("'{}' has no entry in fonts", lf.key),
        ));
    }

    Ok(())
}

fn invalid(field: impl Into<String>, reason: impl Into<String>) -> ProfileError {
    ProfileError::InvalidField {
        field: field.into(),
        reason: reason.into(),
    }
}
