//! One error type for the whole render pipeline.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
    #[error(transparent)]
    Station(#[from] crate::station::StationError),
    #[error(transparent)]
    Forecast(#[from] crate::forecast::ForecastError),
    #[error(transparent)]
    Sun(#[from] crate::sun::SunError),
    #[error("cannot parse font file {0}")]
    Font(PathBuf),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
