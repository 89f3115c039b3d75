//! Render-style descriptors passed through to the backend

use serde::{Deserialize, Serialize};
use threecrate_core::Rgba;

/// Shading model requested for an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shader {
    DefaultUnlit,
    DefaultLit,
    UnlitLine,
    /// Any backend-specific shader name
    Custom(String),
}

impl Shader {
    pub fn name(&self) -> &str {
        match self {
            Shader::DefaultUnlit => "defaultUnlit",
            Shader::DefaultLit => "defaultLit",
            Shader::UnlitLine => "unlitLine",
            Shader::Custom(name) => name,
        }
    }
}

impl Default for Shader {
    fn default() -> Self {
        Shader::DefaultUnlit
    }
}

/// How an entry should be rendered. Never interpreted by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub shader: Shader,
    pub base_color: Rgba,
    pub base_metallic: f32,
    pub base_roughness: f32,
    pub base_reflectance: f32,
    pub point_size: f32,
    pub line_width: f32,
}

impl Material {
    pub fn new(shader: Shader) -> Self {
        Self {
            shader,
            ..Self::default()
        }
    }

    /// Lit material with the given base color
    pub fn lit(base_color: Rgba) -> Self {
        Self::new(Shader::DefaultLit).with_base_color(base_color)
    }

    pub fn with_base_color(mut self, base_color: Rgba) -> Self {
        self.base_color = base_color;
        self
    }

    pub fn with_reflectance(mut self, reflectance: f32) -> Self {
        self.base_reflectance = reflectance;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.base_roughness = roughness;
        self
    }

    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shader: Shader::DefaultUnlit,
            base_color: [1.0, 1.0, 1.0, 1.0],
            base_metallic: 0.0,
            base_roughness: 0.0,
            base_reflectance: 0.5,
            point_size: 3.0,
            line_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_builder() {
        let m = Material::lit([0.05, 0.2, 0.55, 1.0])
            .with_reflectance(0.9)
            .with_roughness(0.01);
        assert_eq!(m.shader.name(), "defaultLit");
        assert_eq!(m.base_reflectance, 0.9);
        assert_eq!(m.point_size, 3.0);
    }

    #[test]
    fn test_material_partial_json() {
        let m: Material =
            serde_json::from_str(r#"{ "shader": "defaultLit", "base_reflectance": 0.1 }"#).unwrap();
        assert_eq!(m.shader, Shader::DefaultLit);
        assert_eq!(m.base_reflectance, 0.1);
        assert_eq!(m.base_color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_custom_shader_json() {
        let m: Material = serde_json::from_str(r#"{ "shader": { "custom": "depth" } }"#).unwrap();
        assert_eq!(m.shader.name(), "depth");
    }
}
