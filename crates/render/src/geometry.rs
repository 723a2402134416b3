//! Page and problem-grid measurements, in PDF points.

use crate::error::RenderError;

/// US Letter.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 36.0;

/// Problems per grid row.
pub const PROBLEMS_PER_ROW: usize = 5;
/// Width of one problem box.
pub const PROBLEM_WIDTH: f32 = 50.0;
/// Height of one problem box.
pub const ROW_HEIGHT: f32 = 40.0;
/// Blank working space between successive problem rows.
pub const ROW_GAP: f32 = 100.0;

pub fn content_width() -> f32 {
    PAGE_WIDTH - 2.0 * MARGIN
}

pub fn content_height() -> f32 {
    PAGE_HEIGHT - 2.0 * MARGIN
}

/// Rows that fit in the content area: one row, plus as many gap-plus-row
/// blocks as the remaining height allows.
pub fn total_possible_rows() -> usize {
    ((content_height() - ROW_HEIGHT) / (ROW_HEIGHT + ROW_GAP)).floor() as usize + 1
}

pub fn rows_required(problem_count: usize) -> usize {
    problem_count.div_ceil(PROBLEMS_PER_ROW)
}

/// Fails when the worksheet needs more rows than the page has. Checked before
/// any page content is emitted.
pub fn check_capacity(problem_count: usize) -> Result<(), RenderError> {
    let available_rows = total_possible_rows();
    let required_rows = rows_required(problem_count);
    if required_rows > available_rows {
        return Err(RenderError::TooManyProblems {
            available_rows,
            required_rows,
            problem_count,
        });
    }
    Ok(())
}
