// Generate the full icon set and check what was written

use crate::config::Config;
use crate::error::IconError;
use crate::render::render_icon;
use crate::style::icon_file_name;
use std::path::{Path, PathBuf};

/// Outcome of one generation run. Each size succeeds or fails on its own.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<(u32, IconError)>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render, write and verify one icon into `dir`.
pub fn generate_icon(size: u32, dir: &Path) -> Result<PathBuf, IconError> {
    let path = dir.join(icon_file_name(size));
    render_icon(size, &path)?;
    verify_icon(&path, size)?;
    Ok(path)
}

/// Generate every configured size. A failed size is recorded and the
/// remaining sizes are still attempted.
pub fn generate_all(config: &Config) -> GenerationReport {
    let mut report = GenerationReport::default();

    for &size in &config.sizes {
        match generate_icon(size, &config.output_dir) {
            Ok(path) => {
                println!("✓ Generated {}x{} icon: {}", size, size, path.display());
                report.written.push(path);
            }
            Err(e) => {
                log::error!("icon {}x{} failed: {}", size, size, e);
                report.failures.push((size, e));
            }
        }
    }

    report
}

/// Decode a written icon and check it has the expected dimensions and
/// something drawn at its center.
pub fn verify_icon(path: &Path, size: u32) -> Result<(), IconError> {
    let img = image::open(path)
        .map_err(|e| IconError::Verify {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .to_rgba8();

    if img.dimensions() != (size, size) {
        let (w, h) = img.dimensions();
        return Err(IconError::Verify {
            path: path.to_path_buf(),
            reason: format!("expected {}x{}, found {}x{}", size, size, w, h),
        });
    }

    let center = img.get_pixel(size / 2, size / 2);
    if center.0[3] == 0 {
        return Err(IconError::Verify {
            path: path.to_path_buf(),
            reason: "center pixel is transparent".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &Path) -> Config {
        Config {
            output_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_generates_all_sizes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = generate_all(&config_in(dir.path()));
        assert!(report.is_success());
        assert_eq!(report.written.len(), 4);

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["icon-128.png", "icon-16.png", "icon-32.png", "icon-48.png"]
        );

        for size in [16, 32, 48, 128] {
            let img = image::open(dir.path().join(icon_file_name(size)))
                .expect("decode")
                .to_rgba8();
            assert_eq!(img.dimensions(), (size, size));
            assert!(img.get_pixel(size / 2, size / 2).0[3] > 0);
            assert_eq!(img.get_pixel(0, 0).0[3], 0);
        }
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        generate_all(&config);
        let before = fs::read(dir.path().join("icon-128.png")).expect("read");
        generate_all(&config);
        let after = fs::read(dir.path().join("icon-128.png")).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_directory_fails_every_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("icons");
        let report = generate_all(&config_in(&missing));

        assert!(!report.is_success());
        assert!(report.written.is_empty());
        let failed: Vec<u32> = report.failures.iter().map(|(s, _)| *s).collect();
        assert_eq!(failed, vec![16, 32, 48, 128]);
        assert!(report.failures.iter().all(|(_, e)| e.is_io()));
        assert!(!missing.exists());
        assert_eq!(fs::read_dir(dir.path()).expect("read_dir").count(), 0);
    }

    #[test]
    fn test_failure_does_not_stop_later_sizes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            output_dir: dir.path().to_path_buf(),
            sizes: vec![0, 16],
        };
        let report = generate_all(&config);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], (0, IconError::Canvas { size: 0 })));
        assert_eq!(report.written, vec![dir.path().join("icon-16.png")]);
    }

    #[test]
    fn test_verify_rejects_wrong_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = generate_icon(32, dir.path()).expect("generate");
        assert!(verify_icon(&path, 32).is_ok());
        assert!(matches!(
            verify_icon(&path, 16),
            Err(IconError::Verify { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_blank_image() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("blank.png");
        image::RgbaImage::new(16, 16).save(&path).expect("save");
        assert!(matches!(
            verify_icon(&path, 16),
            Err(IconError::Verify { .. })
        ));
    }
}
