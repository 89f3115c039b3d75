//! Window options passed through to the render backend

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use threecrate_core::Rgba;

use crate::error::{DrawError, Result};

/// Presentation settings for a viewer window. The viewer itself only
/// reads `title` for logging; everything else is for the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub bg_color: Rgba,
    pub show_skybox: bool,
    pub show_ui: bool,
    pub point_size: f32,
    pub line_width: f32,
    /// Backend-specific settings, passed through verbatim
    pub extra: BTreeMap<String, String>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "threecrate".to_string(),
            width: 1024,
            height: 768,
            bg_color: [1.0, 1.0, 1.0, 1.0],
            show_skybox: false,
            show_ui: true,
            point_size: 3.0,
            line_width: 1.0,
            extra: BTreeMap::new(),
        }
    }
}

impl WindowOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bg_color(mut self, bg_color: Rgba) -> Self {
        self.bg_color = bg_color;
        self
    }

    pub fn with_skybox(mut self, show_skybox: bool) -> Self {
        self.show_skybox = show_skybox;
        self
    }

    /// Parse options from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| DrawError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&json)
            .map_err(|e| DrawError::Config(format!("{}: {}", path.display(), e)))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DrawError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WindowOptions::default();
        assert_eq!(options.title, "threecrate");
        assert_eq!((options.width, options.height), (1024, 768));
        assert!(!options.show_skybox);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = WindowOptions::from_json_str(
            r#"{ "title": "Groups", "show_skybox": true, "extra": { "msaa": "4" } }"#,
        )
        .unwrap();
        assert_eq!(options.title, "Groups");
        assert!(options.show_skybox);
        assert_eq!(options.width, 1024);
        assert_eq!(options.extra.get("msaa").map(String::as_str), Some("4"));
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = WindowOptions::from_json_str(r#"{ "width": 0 }"#);
        assert!(matches!(result, Err(DrawError::Config(_))));
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(
            WindowOptions::from_json_str("{ not json"),
            Err(DrawError::Config(_))
        ));
    }

    #[test]
    fn test_file_error_names_path_once() {
        let path = std::env::temp_dir().join(format!("threecrate-options-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = WindowOptions::from_json_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        let message = err.to_string();
        assert!(matches!(err, DrawError::Config(_)));
        assert_eq!(message.matches("Configuration error").count(), 1);
        assert!(message.contains(&path.display().to_string()));
    }
}
