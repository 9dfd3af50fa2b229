use std::path::PathBuf;
use std::process::ExitStatus;

/// Everything that can stop an icon run.
///
/// A missing packaging tool is not in here: the ICNS exporter reports that
/// through [`crate::export::IcnsOutcome::Skipped`].
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon size must be between 1 and {max} pixels, got {size}")]
    InvalidSize { size: u32, max: u32 },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{program} failed with {status}")]
    Packaging { program: String, status: ExitStatus },

    #[error("invalid value for {key}: {value:?}")]
    Config { key: String, value: String },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }
}
