use serde::Deserialize;

use crate::reset::ResetStrategy;

/// Widget settings, read from the `data-digitboard-config` attribute on `<body>`.
///
/// Every field falls back to its default, so `{}` and a missing attribute behave the same.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    pub canvas_id: String,
    pub result_id: String,
    pub clear_button_id: String,
    pub predict_button_id: String,
    pub endpoint: String,
    pub field_name: String,
    pub file_name: String,
    pub image_type: String,
    pub background: String,
    pub foreground: String,
    pub line_width: f64,
    pub line_cap: String,
    pub reset_delay_ms: i32,
    pub reset: ResetStrategy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            canvas_id: "drawingCanvas".to_string(),
            result_id: "result".to_string(),
            clear_button_id: "clearBtn".to_string(),
            predict_button_id: "predictBtn".to_string(),
            endpoint: "/predict/".to_string(),
            field_name: "file".to_string(),
            file_name: "digit.png".to_string(),
            image_type: "image/png".to_string(),
            background: "black".to_string(),
            foreground: "white".to_string(),
            line_width: 15.0,
            line_cap: "round".to_string(),
            reset_delay_ms: 300,
            reset: ResetStrategy::Reload,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parses an optional attribute value; `None` or blank yields the defaults.
    pub fn from_attribute(value: Option<&str>) -> Result<Self, serde_json::Error> {
        match value.map(str::trim) {
            Some(text) if !text.is_empty() => Self::from_json(text),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.endpoint, "/predict/");
        assert_eq!(config.reset_delay_ms, 300);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            WidgetConfig::from_json(r#"{"endpoint": "/api/predict", "reset": "in_place"}"#)
                .unwrap();
        assert_eq!(config.endpoint, "/api/predict");
        assert_eq!(config.reset, ResetStrategy::InPlace);
        assert_eq!(config.field_name, "file");
        assert_eq!(config.line_width, 15.0);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = WidgetConfig::from_json(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn missing_or_blank_attribute_uses_defaults() {
        assert_eq!(WidgetConfig::from_attribute(None).unwrap(), WidgetConfig::default());
        assert_eq!(
            WidgetConfig::from_attribute(Some("  ")).unwrap(),
            WidgetConfig::default()
        );
    }

    #[test]
    fn malformed_attribute_is_an_error() {
        assert!(WidgetConfig::from_attribute(Some("{endpoint")).is_err());
    }
}
