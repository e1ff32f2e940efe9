use std::path::Path;

use anyhow::Context;
use scara_core::ArmGeometry;

/// Arm configuration.
#[derive(Clone, Debug, Default, PartialEq, serde_derive::Deserialize)]
pub struct Config {
    /// Segment lengths of the arm.
    #[serde(default)]
    pub arm: ArmGeometry,
}

impl Config {
    /// Override the segment lengths given on the command line.
    pub fn with_overrides(self, l1: Option<f64>, l2: Option<f64>) -> anyhow::Result<Self> {
        if l1.is_none() && l2.is_none() {
            return Ok(self);
        }

        let arm = ArmGeometry::new(
            l1.unwrap_or(self.arm.segment1_length()),
            l2.unwrap_or(self.arm.segment2_length()),
        )?;

        Ok(Self { arm })
    }
}

/// Read a TOML configuration file.
pub fn from_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))
}
