use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::error::IconError;

pub const DEFAULT_BASE_SIZE: u32 = 512;
pub const DEFAULT_ICONUTIL: &str = "iconutil";

const ENV_ASSETS_DIR: &str = "CRABCHAT_ASSETS_DIR";
const ENV_ICON_SIZE: &str = "CRABCHAT_ICON_SIZE";
const ENV_ICONUTIL: &str = "CRABCHAT_ICONUTIL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where `icon.png`, `icon.ico` and `icon.icns` land.
    pub assets_dir: PathBuf,
    /// Edge length of the master raster and of `icon.png`.
    pub base_size: u32,
    /// Program (name or path) that packs an `.iconset` into `.icns`.
    pub iconutil: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            base_size: DEFAULT_BASE_SIZE,
            iconutil: DEFAULT_ICONUTIL.to_string(),
        }
    }
}

/// `assets/` next to this crate's manifest.
pub fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

impl Config {
    /// Defaults with `CRABCHAT_*` environment overrides applied.
    ///
    /// Only the crate's own keys are read, so unrelated variables holding
    /// non-UTF-8 data are never looked at.
    pub fn from_env() -> Result<Self, IconError> {
        let mut cfg = Self::default();
        let vars = [ENV_ASSETS_DIR, ENV_ICON_SIZE, ENV_ICONUTIL]
            .into_iter()
            .filter_map(|key| env::var_os(key).map(|value| (key, value)));
        cfg.apply(vars)?;
        Ok(cfg)
    }

    /// Apply `(key, value)` overrides. Unknown keys and blank values are
    /// ignored; a known key whose value is not UTF-8 is rejected.
    pub fn apply<I, K, V>(&mut self, vars: I) -> Result<(), IconError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        for (k, v) in vars {
            let Some(k) = k.as_ref().to_str().map(str::trim) else {
                continue;
            };
            if !matches!(k, ENV_ASSETS_DIR | ENV_ICON_SIZE | ENV_ICONUTIL) {
                continue;
            }
            let raw = v.as_ref();
            let v = raw
                .to_str()
                .ok_or_else(|| IconError::Config {
                    key: k.to_string(),
                    value: raw.to_string_lossy().into_owned(),
                })?
                .trim();
            if v.is_empty() {
                continue;
            }
            match k {
                ENV_ASSETS_DIR => self.assets_dir = PathBuf::from(v),
                ENV_ICON_SIZE => {
                    self.base_size = v.parse::<u32>().map_err(|_| IconError::Config {
                        key: k.to_string(),
                        value: v.to_string(),
                    })?
                }
                ENV_ICONUTIL => self.iconutil = v.to_string(),
                _ => {}
            }
        }
        Ok(())
    }
}
