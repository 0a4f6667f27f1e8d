//! Surface styling and transition direction for the modal
//!
//! `SurfaceStyle::default()` is the fixed look of the dialog paper. Hosts that
//! theme it differently can load partial overrides from JSON; missing fields
//! keep their defaults.

use serde::{Deserialize, Serialize};

/// Direction the dialog slides in from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl SlideDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SlideDirection::Up => "up",
            SlideDirection::Down => "down",
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid surface style: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Paper surface styling for the dialog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    pub border: String,
    pub border_radius_px: u32,
    pub background: String,
    pub box_shadow: String,
    pub min_width_px: u32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            border: "1px solid rgba(var(--center-channel-color-rgb), 0.16)".to_string(),
            border_radius_px: 12,
            background: "var(--center-channel-bg)".to_string(),
            box_shadow: "0 20px 32px 0 rgba(0, 0, 0, 0.12)".to_string(),
            min_width_px: 600,
        }
    }
}

impl SurfaceStyle {
    /// Parse a style from JSON, filling absent fields from the default
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Inline CSS declaration list for the surface element
    pub fn to_css(&self) -> String {
        format!(
            "border: {}; border-radius: {}px; background-color: {}; box-shadow: {}; min-width: {}px;",
            self.border, self.border_radius_px, self.background, self.box_shadow, self.min_width_px
        )
    }
}
