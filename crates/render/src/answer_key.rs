//! The consolidated answer-key page: every worksheet's results in a compact
//! grid, three worksheets per horizontal band.

use lopdf::content::Content;
use mathsheets_problem::Operation;

use crate::context::{Face, PageContext};
use crate::geometry::{self, PROBLEMS_PER_ROW};

const TITLE_SIZE: f32 = 30.0;
const HEADER_SIZE: f32 = 12.0;
const RESULT_SIZE: f32 = 12.0;
/// Vertical pitch of one result row inside a worksheet box.
const RESULT_ROW_HEIGHT: f32 = 15.0;
/// Horizontal pitch between result values.
const RESULT_WIDTH: f32 = 30.0;
/// Worksheet boxes per horizontal band.
const BOXES_PER_BAND: usize = 3;
const BAND_GAP: f32 = 10.0;

/// One worksheet's contribution to the key.
pub struct KeyEntry<'a> {
    pub student_name: &'a str,
    pub sheet_id: &'a str,
    pub operations: &'a [Operation],
}

/// The box height is shared across all entries and sized to the worksheet
/// with the most problem rows.
pub fn answer_key_page(entries: &[KeyEntry<'_>]) -> Content {
    let mut ctx = PageContext::new();
    ctx.draw_text("Answer Key", 0.0, 0.0, Face::Regular, TITLE_SIZE);

    let box_width = geometry::content_width() / BOXES_PER_BAND as f32;
    let max_rows = entries
        .iter()
        .map(|entry| geometry::rows_required(entry.operations.len()))
        .max()
        .unwrap_or(0);
    let box_height = (max_rows + 1) as f32 * RESULT_ROW_HEIGHT;

    let mut band_top = TITLE_SIZE;
    for band in entries.chunks(BOXES_PER_BAND) {
        band_top += BAND_GAP;
        for (idx, entry) in band.iter().enumerate() {
            draw_entry(&mut ctx, entry, idx as f32 * box_width, band_top);
        }
        band_top += box_height;
    }

    ctx.finish()
}

fn draw_entry(ctx: &mut PageContext, entry: &KeyEntry<'_>, x: f32, y: f32) {
    ctx.draw_text(
        &format!("{} / {}", entry.student_name, entry.sheet_id),
        x,
        y,
        Face::Bold,
        HEADER_SIZE,
    );

    let results_top = y + RESULT_ROW_HEIGHT + BAND_GAP;
    for (idx, op) in entry.operations.iter().enumerate() {
        let row = idx / PROBLEMS_PER_ROW;
        let col = idx % PROBLEMS_PER_ROW;
        ctx.draw_text(
            &op.result.to_string(),
            x + col as f32 * RESULT_WIDTH,
            results_top + row as f32 * RESULT_ROW_HEIGHT,
            Face::Regular,
            RESULT_SIZE,
        );
    }
}
