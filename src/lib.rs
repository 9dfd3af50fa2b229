//! Procedural CrabChat app icon: draws the crab once and exports it as
//! `icon.png`, `icon.ico` and (where `iconutil` exists) `icon.icns`.

pub mod config;
pub mod error;
pub mod export;
pub mod helpers;
pub mod icon;
pub mod logger;
pub mod pipeline;
pub mod raster;

pub use config::Config;
pub use error::IconError;
pub use pipeline::{Report, generate_all};
