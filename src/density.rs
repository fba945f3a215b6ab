/// An Android display-density bucket and the launcher icon size it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityTier {
    pub name: &'static str,
    pub size: u32,
}

pub const DENSITY_TIERS: [DensityTier; 5] = [
    DensityTier { name: "mdpi", size: 48 },
    DensityTier { name: "hdpi", size: 72 },
    DensityTier { name: "xhdpi", size: 96 },
    DensityTier { name: "xxhdpi", size: 144 },
    DensityTier { name: "xxxhdpi", size: 192 },
];

impl DensityTier {
    pub fn dir_name(&self) -> String {
        format!("mipmap-{}", self.name)
    }
}
