//! Style configuration for the heatmap color scale.
//!
//! A style JSON file can override the built-in gradient stops. The file
//! carries hex color strings ordered low to high; values are spread evenly
//! across the observed data range at render time.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::scale::Rgb;

/// Style configuration loaded from JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleConfig {
    pub name: String,
    pub description: Option<String>,
    /// Gradient control points as `#RRGGBB` hex strings, low to high.
    pub stops: Vec<String>,
}

impl StyleConfig {
    /// Load style configuration from a JSON string.
    pub fn from_json(json_str: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load style configuration from a file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ChartResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Resolve the hex stops into an ordered color table.
    pub fn color_stops(&self) -> ChartResult<Vec<Rgb>> {
        if self.stops.len() < 2 {
            return Err(ChartError::Style(format!(
                "style '{}' needs at least 2 stops, got {}",
                self.name,
                self.stops.len()
            )));
        }
        self.stops
            .iter()
            .map(|s| {
                hex_to_rgb(s)
                    .ok_or_else(|| ChartError::Style(format!("invalid hex color '{}'", s)))
            })
            .collect()
    }
}

/// Parse a hex color string to RGB.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("#00FF00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(hex_to_rgb("#0000FF"), Some(Rgb::new(0, 0, 255)));
        assert_eq!(hex_to_rgb("FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
    }

    #[test]
    fn test_style_config_from_json() {
        let json = r##"{
            "name": "sunshine",
            "description": "low sun to high sun",
            "stops": ["#1e3264", "#4682b4", "#b4c8a0", "#f0c83c", "#d27814"]
        }"##;
        let config = StyleConfig::from_json(json).unwrap();
        assert_eq!(config.name, "sunshine");
        let stops = config.color_stops().unwrap();
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0], Rgb::new(0x1e, 0x32, 0x64));
    }

    #[test]
    fn test_color_stops_rejects_bad_hex() {
        let config = StyleConfig {
            name: "bad".to_string(),
            description: None,
            stops: vec!["#112233".to_string(), "#nothex".to_string()],
        };
        assert!(config.color_stops().is_err());
    }

    #[test]
    fn test_color_stops_rejects_single_stop() {
        let config = StyleConfig {
            name: "short".to_string(),
            description: None,
            stops: vec!["#112233".to_string()],
        };
        assert!(config.color_stops().is_err());
    }
}
