use thiserror::Error;

use mathsheets_problem::ProblemError;
use mathsheets_render::RenderError;

use crate::config::ParseError;

/// A comprehensive error type for the whole document generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Parse(#[from] ParseError),

    #[error("Problem generation failed: {0}")]
    Generation(#[from] ProblemError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
