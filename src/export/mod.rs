//! Writers that turn the base raster into the shipped asset files.

mod icns;
mod ico;
mod png;

pub use self::icns::{ICNS_ICONSET, IcnsOutcome, export_icns, write_iconset};
pub use self::ico::{ICO_SIZES, export_ico};
pub use self::png::export_png;

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Square copy of `base` at `size`, reusing the pixels when no scaling is needed.
pub(crate) fn resized(base: &RgbaImage, size: u32) -> RgbaImage {
    if base.dimensions() == (size, size) {
        base.clone()
    } else {
        imageops::resize(base, size, size, FilterType::Lanczos3)
    }
}
