use std::path::PathBuf;

use crate::color::Color;
use crate::density::{DensityTier, DENSITY_TIERS};

/// Resource root of the Android module, relative to the working directory.
pub const DEFAULT_RES_DIR: &str = "app/src/main/res";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub res_dir: PathBuf,
    pub background: Color,
    pub accent: Color,
    pub tiers: &'static [DensityTier],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            background: Color::BACKGROUND,
            accent: Color::ACCENT,
            tiers: &DENSITY_TIERS,
        }
    }
}

impl GeneratorConfig {
    pub fn with_res_dir(res_dir: impl Into<PathBuf>) -> Self {
        Self { res_dir: res_dir.into(), ..Self::default() }
    }
}
