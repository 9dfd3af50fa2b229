use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::IconError;

/// Write the raster as-is, no resizing.
pub fn export_png(base: &RgbaImage, path: &Path) -> Result<(), IconError> {
    base.save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Encode { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), width = base.width(), "wrote png");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::render_crab;

    #[test]
    fn writes_unmodified_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let base = render_crab(64).unwrap();

        export_png(&base, &path).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.color(), image::ColorType::Rgba8);
        assert_eq!(back.to_rgba8().as_raw(), base.as_raw());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("icon.png");
        let base = render_crab(8).unwrap();

        let err = export_png(&base, &path).unwrap_err();
        assert!(matches!(err, IconError::Encode { .. }));
    }
}
