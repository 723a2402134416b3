//! Low-level content-stream drawing.
//!
//! Callers work in top-down coordinates relative to the page content area;
//! the conversion to PDF user space (bottom-up, margin-inclusive) happens
//! here.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

use crate::geometry::{MARGIN, PAGE_HEIGHT};

/// Builtin Type1 faces registered in the document resources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    fn resource_name(self) -> &'static [u8] {
        match self {
            Face::Regular => b"F1",
            Face::Bold => b"F2",
        }
    }
}

pub struct PageContext {
    content: Content,
    last_font: Option<(Face, f32)>,
    last_fill: (u8, u8, u8),
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            last_font: None,
            last_fill: (0, 0, 0),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    /// Draws `text` with its top-left corner at (`x`, `y`).
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, face: Face, size: f32) {
        if text.is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(face, size);
        let baseline_y = y + size * 0.8;
        let pdf_y = PAGE_HEIGHT - MARGIN - baseline_y;
        self.content
            .operations
            .push(Operation::new("Td", vec![(MARGIN + x).into(), pdf_y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    /// Draws `text` so that it ends at `right_edge`.
    pub fn draw_text_right(&mut self, text: &str, right_edge: f32, y: f32, face: Face, size: f32) {
        let x = right_edge - approx_text_width(text, size);
        self.draw_text(text, x, y, face, size);
    }

    pub fn set_fill_color(&mut self, r: u8, g: u8, b: u8) {
        if self.last_fill == (r, g, b) {
            return;
        }
        self.content.operations.push(Operation::new(
            "rg",
            vec![
                (r as f32 / 255.0).into(),
                (g as f32 / 255.0).into(),
                (b as f32 / 255.0).into(),
            ],
        ));
        self.last_fill = (r, g, b);
    }

    /// Strokes a straight line between the two points, top-down coordinates.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.content.operations.push(Operation::new(
            "m",
            vec![(MARGIN + x1).into(), (PAGE_HEIGHT - MARGIN - y1).into()],
        ));
        self.content.operations.push(Operation::new(
            "l",
            vec![(MARGIN + x2).into(), (PAGE_HEIGHT - MARGIN - y2).into()],
        ));
        self.content.operations.push(Operation::new("S", vec![]));
    }

    fn set_font(&mut self, face: Face, size: f32) {
        if self.last_font == Some((face, size)) {
            return;
        }
        self.content.operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(face.resource_name().to_vec()),
                size.into(),
            ],
        ));
        self.last_font = Some((face, size));
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new()
    }
}

/// WinAnsi agrees with Latin-1 on everything this renderer emits; anything
/// outside that range degrades to '?'.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

/// Width estimate for the builtin faces. Helvetica is not fixed-pitch, but
/// 0.6 em per character is close enough to align short numeric text.
pub fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.len() as f32 * font_size * 0.6
}
