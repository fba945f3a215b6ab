use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::IconError;
use crate::icon::{self, IconVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub variant: IconVariant,
}

/// Render and save every variant for every density tier, in table order.
///
/// Missing directories are created. The first directory or write failure
/// aborts the run; files written before it are left in place.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<GeneratedIcon>, IconError> {
    let mut written = Vec::with_capacity(config.tiers.len() * IconVariant::ALL.len());

    for tier in config.tiers {
        let dir = config.res_dir.join(tier.dir_name());
        fs::create_dir_all(&dir).map_err(|source| IconError::CreateDir { path: dir.clone(), source })?;
        debug!("{}: {}px into {}", tier.name, tier.size, dir.display());

        for variant in IconVariant::ALL {
            let path = dir.join(variant.file_name());
            let img = icon::render_variant(variant, tier.size, config.background, config.accent);
            img.save(&path)
                .map_err(|source| IconError::Save { path: path.clone(), source })?;
            println!("Created {} ({}x{})", path.display(), tier.size, tier.size);
            debug!("wrote {:?} icon {}", variant, path.display());
            written.push(GeneratedIcon { path, size: tier.size, variant });
        }
    }

    info!("{} launcher icons written under {}", written.len(), config.res_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::density::DENSITY_TIERS;
    use crate::icon::lock_body;
    use image::{ColorType, GenericImageView};

    fn run_into_tempdir() -> (tempfile::TempDir, GeneratorConfig, Vec<GeneratedIcon>) {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = GeneratorConfig::with_res_dir(tmp.path().join("app/src/main/res"));
        let written = generate(&cfg).unwrap();
        (tmp, cfg, written)
    }

    #[test]
    fn test_writes_ten_files_with_tier_sizes() {
        let (_tmp, cfg, written) = run_into_tempdir();
        assert_eq!(written.len(), 10);

        for tier in DENSITY_TIERS {
            let dir = cfg.res_dir.join(format!("mipmap-{}", tier.name));
            let mut names: Vec<_> = std::fs::read_dir(&dir)
                .unwrap()
                .map(|e| e.unwrap().file_name().into_string().unwrap())
                .collect();
            names.sort();
            assert_eq!(names, ["ic_launcher.png", "ic_launcher_round.png"]);

            for name in &names {
                let img = image::open(dir.join(name)).unwrap();
                assert_eq!(img.dimensions(), (tier.size, tier.size), "{}/{}", tier.name, name);
            }
        }
    }

    #[test]
    fn test_records_follow_table_order() {
        let (_tmp, cfg, written) = run_into_tempdir();
        let expected: Vec<_> = DENSITY_TIERS
            .iter()
            .flat_map(|t| IconVariant::ALL.map(|v| (t.size, v)))
            .collect();
        let got: Vec<_> = written.iter().map(|g| (g.size, g.variant)).collect();
        assert_eq!(got, expected);
        assert_eq!(
            written[1].path,
            cfg.res_dir.join("mipmap-mdpi").join("ic_launcher_round.png")
        );
    }

    #[test]
    fn test_square_is_opaque_round_is_transparent_outside_disk() {
        let (_tmp, _cfg, written) = run_into_tempdir();
        for icon in &written {
            let img = image::open(&icon.path).unwrap();
            match icon.variant {
                IconVariant::Square => assert_eq!(img.color(), ColorType::Rgb8),
                IconVariant::Round => {
                    assert_eq!(img.color(), ColorType::Rgba8);
                    let mid = icon.size / 2;
                    assert_eq!(img.get_pixel(0, 0)[3], 0);
                    assert_eq!(img.get_pixel(icon.size - 1, icon.size - 1)[3], 0);
                    assert_eq!(img.get_pixel(mid, mid)[3], 255);
                }
            }
        }
    }

    #[test]
    fn test_center_pixels() {
        let (_tmp, _cfg, written) = run_into_tempdir();
        let bg = Color::BACKGROUND.to_rgba();
        let accent = Color::ACCENT.to_rgba();
        for icon in &written {
            let img = image::open(&icon.path).unwrap();
            let mid = icon.size / 2;
            let center = img.get_pixel(mid, mid);
            assert!(center == bg || center == accent, "{}: center {:?}", icon.path.display(), center);

            let [x0, y0, x1, y1] = lock_body(icon.size);
            assert_eq!(x0 + (x1 - x0) / 2, mid as i32);
            for y in y0..=y1 {
                assert_eq!(img.get_pixel(mid, y as u32), bg, "{} row {y}", icon.path.display());
            }
        }
    }

    #[test]
    fn test_mdpi_square_scenario() {
        let (_tmp, cfg, _) = run_into_tempdir();
        let img = image::open(cfg.res_dir.join("mipmap-mdpi/ic_launcher.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(img.dimensions(), (48, 48));
        let bg = Color::from_hex("#1e3a8a").unwrap().to_rgb();
        for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47)] {
            assert_eq!(*img.get_pixel(x, y), bg);
        }
        let [x0, y0, x1, y1] = lock_body(48);
        assert_eq!(*img.get_pixel(((x0 + x1) / 2) as u32, ((y0 + y1) / 2) as u32), bg);
    }

    #[test]
    fn test_second_run_is_byte_identical() {
        let (_tmp, cfg, first) = run_into_tempdir();
        let before: Vec<Vec<u8>> = first.iter().map(|g| std::fs::read(&g.path).unwrap()).collect();

        let second = generate(&cfg).unwrap();
        assert_eq!(first, second);
        for (icon, old) in second.iter().zip(before) {
            assert_eq!(std::fs::read(&icon.path).unwrap(), old, "{}", icon.path.display());
        }
    }

    #[test]
    fn test_creates_missing_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("does/not/exist/res");
        assert!(!root.exists());
        generate(&GeneratorConfig::with_res_dir(&root)).unwrap();
        assert!(root.join("mipmap-xxxhdpi/ic_launcher_round.png").is_file());
    }

    #[test]
    fn test_write_failure_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        // A plain file where the resource root should be blocks directory creation.
        let blocker = tmp.path().join("res");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let err = generate(&GeneratorConfig::with_res_dir(&blocker)).unwrap_err();
        assert!(matches!(err, IconError::CreateDir { .. }), "{err}");
    }
}
