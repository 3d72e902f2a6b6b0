//! Slide discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use glide_core::{RasterSlide, Size, SlideImage};
use iced::widget::image::Handle;

/// File extensions picked up from a slide directory, compared
/// case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

/// A slide as the window draws it. Decoding is left to the renderer; only the
/// header is read up front for the dimensions.
#[derive(Debug, Clone)]
pub struct Slide {
    handle: Handle,
    size: Size,
    path: PathBuf,
}

impl Slide {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let (width, height) = image::image_dimensions(path).with_context(|| {
            format!("failed to read dimensions of {}", path.display())
        })?;
        Ok(Self {
            handle: Handle::from_path(path),
            size: Size::new(width as f32, height as f32),
            path: path.to_path_buf(),
        })
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SlideImage for Slide {
    fn dimensions(&self) -> Size {
        self.size
    }
}

/// Opens slides for the snapshot renderer.
pub fn open_raster(path: &Path) -> anyhow::Result<RasterSlide> {
    Ok(RasterSlide::open(path)?)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Image files directly inside `dir`, sorted by file name.
pub fn image_paths(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| {
        format!("failed to read slide directory {}", dir.display())
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Opens every image in `dir` with `open`, skipping the ones that fail.
pub fn load_directory<T, F>(dir: &Path, open: F) -> anyhow::Result<Vec<T>>
where
    F: Fn(&Path) -> anyhow::Result<T>,
{
    let paths = image_paths(dir)?;
    let mut slides = Vec::with_capacity(paths.len());
    for path in &paths {
        match open(path) {
            Ok(slide) => slides.push(slide),
            Err(err) => log::warn!("skipping {}: {err:#}", path.display()),
        }
    }

    log::info!(
        "loaded {} of {} images from {}",
        slides.len(),
        paths.len(),
        dir.display()
    );
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn lists_images_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "b.png", 2, 2);
        write_png(dir.path(), "a.PNG", 2, 2);
        fs::write(dir.path().join("notes.txt"), "not a slide").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.PNG", "b.png"]);
    }

    #[test]
    fn unreadable_images_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "good.png", 6, 3);
        fs::write(dir.path().join("broken.png"), b"not really a png").unwrap();

        let slides = load_directory(dir.path(), Slide::open).unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].dimensions(), Size::new(6.0, 3.0));
        assert!(slides[0].path().ends_with("good.png"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(image_paths(&dir.path().join("absent")).is_err());
    }
}
