use crate::api::error::ApiError;
use crate::config::ConfigError;
use crate::location::error::LocationError;
use crate::render::error::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkycastError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
