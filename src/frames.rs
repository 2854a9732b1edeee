//! Loads the pre-rendered clock-face frames and the window icon.

use std::env;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use image::imageops::FilterType;

pub const FRAMES_PATH: &str = "frames";
pub const ICON_FILENAME: &str = "icon.png";

/// Resolves an asset path relative to the executable, falling back to the
/// working directory when running from the source tree.
pub fn resource_path(relative: &str) -> PathBuf {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let path = dir.join(relative);
            if path.exists() {
                return path;
            }
        }
    }
    PathBuf::from(relative)
}

pub struct FrameStore {
    dir: PathBuf,
}

impl FrameStore {
    pub fn new() -> Self {
        Self {
            dir: resource_path(FRAMES_PATH),
        }
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index}.png"))
    }

    /// Decodes the frame for `index` and scales it to `size` x `size`
    /// RGBA8 pixels. A missing or undecodable file is an error the caller
    /// recovers from by showing [`missing_label`].
    pub fn load(&self, index: usize, size: u32) -> Result<Vec<u8>> {
        let path = self.frame_path(index);
        let img = image::open(&path)
            .wrap_err_with(|| format!("failed to load {}", path.display()))?;
        Ok(img
            .resize_exact(size, size, FilterType::Lanczos3)
            .into_rgba8()
            .into_raw())
    }
}

/// In-window fallback text for a frame whose file is absent.
pub fn missing_label(index: usize) -> String {
    format!("Missing frame_{index}.png")
}

/// Decodes the window icon to RGBA8 pixels plus dimensions.
pub fn load_icon(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::open(path)
        .wrap_err_with(|| format!("failed to load {}", path.display()))?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frame_paths_follow_the_naming_pattern() {
        let store = FrameStore {
            dir: PathBuf::from(FRAMES_PATH),
        };
        assert_eq!(
            store.frame_path(62),
            Path::new(FRAMES_PATH).join("frame_62.png")
        );
    }

    #[test]
    fn missing_frame_is_a_recoverable_error() {
        let store = FrameStore {
            dir: PathBuf::from("no-such-directory"),
        };
        assert!(store.load(5, 300).is_err());
    }

    #[test]
    fn fallback_label_names_the_file() {
        assert_eq!(missing_label(5), "Missing frame_5.png");
    }

    #[test]
    fn missing_icon_is_a_recoverable_error() {
        assert!(load_icon(Path::new("no-such-icon.png")).is_err());
    }
}
