use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::IconError;
use crate::export::{ICO_SIZES, IcnsOutcome, export_icns, export_ico, export_png};
use crate::icon::render_crab;

pub const PNG_NAME: &str = "icon.png";
pub const ICO_NAME: &str = "icon.ico";
pub const ICNS_NAME: &str = "icon.icns";

/// What one run produced, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub assets_dir: PathBuf,
    pub png: PathBuf,
    pub base_size: u32,
    pub ico: PathBuf,
    pub icns: IcnsOutcome,
}

impl Report {
    /// One progress line per asset, as printed by `genicon`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Generated {} ({}x{})", self.png.display(), self.base_size, self.base_size),
            format!("Generated {} (sizes: {:?})", self.ico.display(), ICO_SIZES),
        ];
        lines.push(match &self.icns {
            IcnsOutcome::Written(path) => format!("Generated {}", path.display()),
            IcnsOutcome::Skipped { tool } => {
                format!("{tool} not found, skipping .icns generation (macOS only)")
            }
        });
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        write!(f, "Done! All icons generated in {}", self.assets_dir.display())
    }
}

/// Render once at the base size, then write PNG, ICO and ICNS in that order.
///
/// Stops at the first error; files written before it stay on disk. An invalid
/// base size fails before the assets directory is created.
pub fn generate_all(cfg: &Config) -> Result<Report, IconError> {
    let base = render_crab(cfg.base_size)?;
    info!(size = cfg.base_size, "rendered base icon");

    let dir = cfg.assets_dir.as_path();
    fs::create_dir_all(dir).map_err(|e| IconError::io(dir, e))?;

    let png = asset(dir, PNG_NAME);
    export_png(&base, &png)?;

    let ico = asset(dir, ICO_NAME);
    export_ico(&base, &ico)?;

    let icns = export_icns(&base, &asset(dir, ICNS_NAME), &cfg.iconutil)?;

    Ok(Report {
        assets_dir: dir.to_path_buf(),
        png,
        base_size: cfg.base_size,
        ico,
        icns,
    })
}

fn asset(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
