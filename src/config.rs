use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{FlyTuning, OrbitTuning};

/// Initial window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Runtime settings shared by every demo. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub fly: FlyTuning,
    pub orbit: OrbitTuning,
    /// Seed for the woodland tree scatter
    pub woodland_seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            fly: FlyTuning::default(),
            orbit: OrbitTuning::default(),
            woodland_seed: 363,
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {path:?}"))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {path:?}"))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            bail!("window size must be non-zero");
        }

        let fly = &self.fly;
        for (name, value) in [
            ("fly.move_step", fly.move_step),
            ("fly.turn_degrees", fly.turn_degrees),
            ("fly.vertical_step", fly.vertical_step),
            ("fly.fov_step", fly.fov_step),
            ("fly.fov_min", fly.fov_min),
            ("orbit.angle_step_degrees", self.orbit.angle_step_degrees),
        ] {
            if value.is_nan() || value <= 0.0 {
                bail!("{name} must be positive, got {value}");
            }
        }
        if fly.fov_min > fly.fov_max {
            bail!(
                "fly.fov_min ({}) is larger than fly.fov_max ({})",
                fly.fov_min,
                fly.fov_max
            );
        }
        if fly.fov_max >= 180.0 {
            bail!("fly.fov_max must be below 180 degrees");
        }

        let polar = self.orbit.min_polar_degrees;
        if polar.is_nan() || polar <= 0.0 || polar >= 90.0 {
            bail!("orbit.min_polar_degrees must lie in (0, 90), got {polar}");
        }
        Ok(())
    }
}
