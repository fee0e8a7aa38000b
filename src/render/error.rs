use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart backend failed to draw: {0}")]
    Backend(String),
}
