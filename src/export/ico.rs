use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use tracing::debug;

use crate::error::IconError;

/// Edge lengths packed into `icon.ico`, smallest first.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Pack one Lanczos3 downscale of `base` per entry in [`ICO_SIZES`].
pub fn export_ico(base: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for size in ICO_SIZES {
        let frame = super::resized(base, size);
        let image = IconImage::from_rgba_data(size, size, frame.into_raw());
        let entry = IconDirEntry::encode(&image).map_err(|e| IconError::io(path, e))?;
        dir.add_entry(entry);
    }

    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    write_icon_dir(&dir, file).map_err(|e| IconError::io(path, e))?;
    debug!(path = %path.display(), sizes = ?ICO_SIZES, "wrote ico");
    Ok(())
}

/// Buffered write of `dir`, flushed before returning so a failing final write
/// is reported instead of being dropped with the buffer.
fn write_icon_dir<W: Write>(dir: &IconDir, out: W) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    dir.write(&mut out)?;
    out.flush()
}
