//! Android launcher icon generator: a shield-and-lock glyph rendered for every
//! mipmap density, as a square and a round variant.

pub mod color;
pub mod config;
pub mod density;
pub mod error;
pub mod generator;
pub mod icon;
pub mod logger;
pub mod raster;

pub use color::Color;
pub use config::GeneratorConfig;
pub use density::{DensityTier, DENSITY_TIERS};
pub use error::IconError;
pub use generator::{generate, GeneratedIcon};
pub use icon::{render_round, render_square, render_variant, IconVariant};
