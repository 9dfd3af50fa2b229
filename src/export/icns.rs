use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::IconError;
use crate::helpers::find_program;
use crate::logger::log_command;

/// File names `iconutil` expects inside an `.iconset`, with their edge length.
pub const ICNS_ICONSET: [(&str, u32); 9] = [
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IcnsOutcome {
    Written(PathBuf),
    /// The packaging tool could not be found; nothing was written.
    Skipped { tool: String },
}

/// Fill `dir` with the Lanczos3-resampled PNGs listed in [`ICNS_ICONSET`].
pub fn write_iconset(base: &RgbaImage, dir: &Path) -> Result<(), IconError> {
    for (name, size) in ICNS_ICONSET {
        let path = dir.join(name);
        super::resized(base, size)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| IconError::Encode { path, source })?;
    }
    Ok(())
}

/// Build `path` with the macOS packaging tool (`iconutil` or a stand-in).
///
/// When `tool` is not installed this returns [`IcnsOutcome::Skipped`] and
/// leaves reporting the skip to the caller. Otherwise the iconset is staged in a fresh
/// temporary directory that is removed again before returning, whether or not
/// the tool succeeded. A tool that exits unsuccessfully is an error.
pub fn export_icns(base: &RgbaImage, path: &Path, tool: &str) -> Result<IcnsOutcome, IconError> {
    let Some(program) = find_program(tool) else {
        debug!(tool, "packaging tool not found");
        return Ok(IcnsOutcome::Skipped { tool: tool.to_string() });
    };

    let staging = tempfile::Builder::new()
        .prefix("crabchat-icns")
        .tempdir()
        .map_err(|e| IconError::io(std::env::temp_dir(), e))?;
    let iconset = staging.path().join("icon.iconset");
    fs::create_dir(&iconset).map_err(|e| IconError::io(&iconset, e))?;
    write_iconset(base, &iconset)?;

    let args = [
        "-c".to_string(),
        "icns".to_string(),
        iconset.display().to_string(),
        "-o".to_string(),
        path.display().to_string(),
    ];
    log_command(&program.display().to_string(), &args);
    let status = Command::new(&program)
        .args(["-c", "icns"])
        .arg(&iconset)
        .arg("-o")
        .arg(path)
        .status()
        .map_err(|e| IconError::io(&program, e))?;

    if !status.success() {
        return Err(IconError::Packaging { program: program.display().to_string(), status });
    }
    debug!(path = %path.display(), "wrote icns");
    Ok(IcnsOutcome::Written(path.to_path_buf()))
}
