//! Lays out one worksheet page: title, name/score details box and the
//! problem grid.

use lopdf::content::Content;
use mathsheets_problem::Operation;

use crate::context::{Face, PageContext};
use crate::error::RenderError;
use crate::geometry::{self, PROBLEM_WIDTH, PROBLEMS_PER_ROW, ROW_GAP, ROW_HEIGHT};

const TITLE_SIZE: f32 = 30.0;

const DETAILS_WIDTH: f32 = 200.0;
const DETAILS_HEIGHT: f32 = 35.0;
const DETAILS_SIZE: f32 = 12.0;
const SHEET_ID_SIZE: f32 = 10.0;
/// Where the fill-in rules start, relative to the details box.
const DETAILS_LINE_X: f32 = 40.0;

const PROBLEM_SIZE: f32 = 18.0;
const PROBLEM_LINE_HEIGHT: f32 = 20.0;
/// Gap between the details box and the first problem row.
const GRID_TOP_GAP: f32 = 40.0;

pub fn worksheet_page(
    student_name: &str,
    sheet_id: &str,
    operations: &[Operation],
) -> Result<Content, RenderError> {
    geometry::check_capacity(operations.len())?;

    let mut ctx = PageContext::new();
    let width = geometry::content_width();

    // Title sits bottom-aligned beside the details box.
    ctx.draw_text(
        "Math Practice",
        0.0,
        DETAILS_HEIGHT - TITLE_SIZE,
        Face::Regular,
        TITLE_SIZE,
    );
    draw_details_box(&mut ctx, student_name, sheet_id, width - DETAILS_WIDTH);

    let grid_top = DETAILS_HEIGHT + GRID_TOP_GAP;
    let column_gap =
        (width - PROBLEMS_PER_ROW as f32 * PROBLEM_WIDTH) / (PROBLEMS_PER_ROW as f32 - 1.0);

    for (idx, op) in operations.iter().enumerate() {
        let row = idx / PROBLEMS_PER_ROW;
        let col = idx % PROBLEMS_PER_ROW;
        let x = col as f32 * (PROBLEM_WIDTH + column_gap);
        let y = grid_top + row as f32 * (ROW_HEIGHT + ROW_GAP);
        draw_problem(&mut ctx, op, x, y);
    }

    Ok(ctx.finish())
}

fn draw_details_box(ctx: &mut PageContext, student_name: &str, sheet_id: &str, x: f32) {
    if !sheet_id.is_empty() {
        ctx.set_fill_color(0x99, 0x99, 0x99);
        ctx.draw_text_right(sheet_id, x + DETAILS_WIDTH, 0.0, Face::Regular, SHEET_ID_SIZE);
        ctx.set_fill_color(0, 0, 0);
    }

    ctx.draw_text(
        &format!("Name: {student_name}"),
        x,
        0.0,
        Face::Regular,
        DETAILS_SIZE,
    );
    ctx.draw_line(x + DETAILS_LINE_X, 11.0, x + DETAILS_WIDTH, 11.0);

    ctx.draw_text("Score:", x, 19.0, Face::Regular, DETAILS_SIZE);
    ctx.draw_line(x + DETAILS_LINE_X, 30.0, x + DETAILS_WIDTH, 30.0);
}

/// One problem box: left operand over operator and right operand, with an
/// answer rule along the bottom edge.
fn draw_problem(ctx: &mut PageContext, op: &Operation, x: f32, y: f32) {
    ctx.draw_text_right(
        &op.left.to_string(),
        x + PROBLEM_WIDTH,
        y,
        Face::Regular,
        PROBLEM_SIZE,
    );
    ctx.draw_text(
        &op.operator.to_string(),
        x,
        y + PROBLEM_LINE_HEIGHT,
        Face::Regular,
        PROBLEM_SIZE,
    );
    ctx.draw_text_right(
        &op.right.to_string(),
        x + PROBLEM_WIDTH,
        y + PROBLEM_LINE_HEIGHT,
        Face::Regular,
        PROBLEM_SIZE,
    );
    ctx.draw_line(x, y + ROW_HEIGHT, x + PROBLEM_WIDTH, y + ROW_HEIGHT);
}
