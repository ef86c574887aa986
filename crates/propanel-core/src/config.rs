//! Panel configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, PanelResult};

/// Layout settings shared by a panel and its controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Panel width in points.
    pub width: f32,
    /// Height of a slider row (label + track).
    pub slider_row_height: f32,
    /// Height assumed for list items without an explicit height.
    pub default_row_height: f32,
    /// Horizontal padding on each side of a slider track.
    pub label_padding: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            width: 245.0,
            slider_row_height: 65.0,
            default_row_height: 27.0,
            label_padding: 10.0,
        }
    }
}

impl GuiConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> PanelResult<Self> {
        serde_json::from_str(json).map_err(|e| PanelError::Config(e.to_string()))
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> PanelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PanelError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuiConfig::default();
        assert!((config.slider_row_height - 65.0).abs() < f32::EPSILON);
        assert!((config.label_padding - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GuiConfig::from_json(r#"{ "width": 320 }"#).unwrap();
        assert!((config.width - 320.0).abs() < f32::EPSILON);
        assert!((config.slider_row_height - 65.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GuiConfig {
            width: 300.0,
            slider_row_height: 48.0,
            default_row_height: 24.0,
            label_padding: 6.0,
        };
        let json = config.to_json().unwrap();
        assert_eq!(GuiConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = GuiConfig::from_json("{ width: }").unwrap_err();
        assert!(matches!(err, PanelError::Config(_)));
    }
}
