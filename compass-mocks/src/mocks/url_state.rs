//! URL state persistence for the modal mock
//!
//! Serializes control state as base64-encoded JSON in the query string,
//! keeping URLs opaque and avoiding conflicts with query parameter names.
//! Only fields that differ from the defaults are written.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use compass_ui::{SlideDirection, SurfaceStyle, ThemeError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum MockStateError {
    #[error("state is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Controls of the modal mock page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalMockState {
    pub is_open: bool,
    pub with_confirm: bool,
    pub with_cancel: bool,
    pub with_close: bool,
    pub keep_mounted: bool,
    pub slide_direction: SlideDirection,
    /// `SurfaceStyle` overrides as JSON; empty means the default surface
    pub surface_json: String,
    pub dialog_class: String,
    pub body: String,
}

impl Default for ModalMockState {
    fn default() -> Self {
        Self {
            is_open: true,
            with_confirm: true,
            with_cancel: true,
            with_close: true,
            keep_mounted: true,
            slide_direction: SlideDirection::default(),
            surface_json: String::new(),
            dialog_class: String::new(),
            body: "Hello".to_string(),
        }
    }
}

impl ModalMockState {
    /// Decode a state string from the `state` query parameter
    pub fn decode(encoded: &str) -> Result<Self, MockStateError> {
        if encoded.is_empty() {
            return Ok(Self::default());
        }
        let json_bytes = URL_SAFE_NO_PAD.decode(encoded)?;
        Ok(serde_json::from_slice(&json_bytes)?)
    }

    /// State for a page load. Undecodable state falls back to the defaults.
    pub fn from_query(encoded: Option<&str>) -> Self {
        let Some(encoded) = encoded else {
            return Self::default();
        };
        match Self::decode(encoded) {
            Ok(state) => state,
            Err(e) => {
                warn!("Ignoring modal mock state: {}", e);
                Self::default()
            }
        }
    }

    /// Surface for the modal, plus the parse error when `surface_json` is invalid
    pub fn surface_style(&self) -> (SurfaceStyle, Option<ThemeError>) {
        if self.surface_json.trim().is_empty() {
            return (SurfaceStyle::default(), None);
        }
        match SurfaceStyle::from_json(&self.surface_json) {
            Ok(style) => (style, None),
            Err(e) => (SurfaceStyle::default(), Some(e)),
        }
    }

    /// Encode the fields that differ from the defaults. `None` when nothing differs.
    pub fn encode(&self) -> Option<String> {
        let Ok(Value::Object(current)) = serde_json::to_value(self) else {
            return None;
        };
        let Ok(Value::Object(defaults)) = serde_json::to_value(Self::default()) else {
            return None;
        };
        let changed: Map<String, Value> = current
            .into_iter()
            .filter(|(key, value)| defaults.get(key) != Some(value))
            .collect();
        if changed.is_empty() {
            return None;
        }
        let json = Value::Object(changed).to_string();
        Some(URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

/// Named configurations offered as one-click presets
pub fn presets() -> Vec<(&'static str, ModalMockState)> {
    vec![
        ("Default", ModalMockState::default()),
        (
            "Alert only",
            ModalMockState {
                with_confirm: false,
                with_cancel: false,
                body: "Your export has finished.".to_string(),
                ..ModalMockState::default()
            },
        ),
        (
            "Confirm only",
            ModalMockState {
                with_cancel: false,
                body: "Apply the new retention policy?".to_string(),
                ..ModalMockState::default()
            },
        ),
    ]
}
