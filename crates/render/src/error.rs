use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    Pdf(String),

    /// The worksheet holds more problems than the page has rows for. Hard
    /// capacity check, not retried.
    #[error(
        "too many problems to render (room for {available_rows} rows, worksheet has \
         {required_rows} rows with {} problems each, {problem_count} total problems)",
        crate::geometry::PROBLEMS_PER_ROW
    )]
    TooManyProblems {
        available_rows: usize,
        required_rows: usize,
        problem_count: usize,
    },
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
