//! Renderer configuration: the `projection` / `edgeThickness` parameter surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Parameter keys accepted by [`RenderOptions::from_value`].
pub const KNOWN_PARAMETERS: &[&str] = &["projection", "edgeThickness"];

pub const DEFAULT_EDGE_THICKNESS: f64 = 1.0;

/// The space graphs are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Hyperbolic,
    Euclidean,
}

impl FromStr for Projection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hyperbolic" => Ok(Projection::Hyperbolic),
            "euclidean" => Ok(Projection::Euclidean),
            _ => Err(ConfigError::InvalidProjection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Projection {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Hyperbolic => write!(f, "hyperbolic"),
            Projection::Euclidean => write!(f, "euclidean"),
        }
    }
}

/// A partial update of the renderer's settings. Unset fields are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_thickness: Option<f64>,
}

impl RenderOptions {
    /// Validate a loosely-typed parameter object.
    ///
    /// Keys are checked before values so an unknown key is always reported as
    /// [`ConfigError::UnknownParameter`], whatever else is wrong. The serde
    /// `deny_unknown_fields` error only carries a message, so the key scan is
    /// done here to keep the offending key typed.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let map = value.as_object().ok_or(ConfigError::NotAnObject)?;

        if let Some(key) = map.keys().find(|k| !KNOWN_PARAMETERS.contains(&k.as_str())) {
            return Err(ConfigError::UnknownParameter(key.clone()));
        }

        let projection = match map.get("projection") {
            None => None,
            Some(Value::String(s)) => Some(s.parse()?),
            Some(other) => return Err(ConfigError::InvalidProjection(other.to_string())),
        };

        let edge_thickness = match map.get("edgeThickness") {
            None => None,
            Some(v) => Some(
                v.as_f64()
                    .filter(|t| t.is_finite() && *t >= 0.0)
                    .ok_or_else(|| ConfigError::InvalidEdgeThickness(v.to_string()))?,
            ),
        };

        Ok(Self {
            projection,
            edge_thickness,
        })
    }

    /// Check values a typed caller could still get wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(t) = self.edge_thickness {
            if !t.is_finite() || t < 0.0 {
                return Err(ConfigError::InvalidEdgeThickness(t.to_string()));
            }
        }
        Ok(())
    }
}

/// Fully resolved renderer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSettings {
    pub projection: Projection,
    pub edge_thickness: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            projection: Projection::Hyperbolic,
            edge_thickness: DEFAULT_EDGE_THICKNESS,
        }
    }
}

impl RenderSettings {
    pub fn apply(&mut self, options: &RenderOptions) -> Result<(), ConfigError> {
        options.validate()?;
        if let Some(projection) = options.projection {
            self.projection = projection;
        }
        if let Some(thickness) = options.edge_thickness {
            self.edge_thickness = thickness;
        }
        Ok(())
    }
}

/// Space left around the Euclidean plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 30.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}
