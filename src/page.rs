//! # Page Model
//!
//! A page is an ordered list of draw instructions in dot coordinates.
//! Layouts build pages; surfaces consume them.
//!
//! ```text
//! label::layout / receipt::layout → Page (inspectable, serializable)
//!                                     ↓ replay
//!                                  Surface (Canvas → PNG / printer raster)
//! ```
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (dots, page width)
//!   │
//!   ▼
//!   Y (dots, paper feed direction)
//! ```

use serde::Serialize;

/// Horizontal text alignment inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// An axis-aligned box in dots. Coordinates may be negative; surfaces clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Text style: glyph cell height in dots plus weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub size: u32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn regular(size: u32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: u32) -> Self {
        Self { size, bold: true }
    }
}

/// A single draw instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Single line of text aligned inside `rect`, clipped to it.
    Text {
        rect: Rect,
        text: String,
        style: TextStyle,
        align: Alignment,
    },

    /// Solid black rectangle.
    FillRect { rect: Rect },

    /// Horizontal rule from `x1` to `x2`, centered on `y`.
    Rule {
        x1: i32,
        x2: i32,
        y: i32,
        thickness: u32,
    },
}

/// A drawing target.
///
/// The raster [`Canvas`](crate::render::Canvas) is the production
/// implementation; anything that can place text and fill boxes can be one.
pub trait Surface {
    fn draw_text(&mut self, rect: Rect, text: &str, style: TextStyle, align: Alignment);

    fn fill_rect(&mut self, rect: Rect);

    fn draw_rule(&mut self, x1: i32, x2: i32, y: i32, thickness: u32);
}

/// A fixed-width page of draw instructions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Document name, shown in logs and used as the print job title
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn new(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height: 0,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn text(&mut self, rect: Rect, text: impl Into<String>, style: TextStyle, align: Alignment) {
        self.push(DrawOp::Text {
            rect,
            text: text.into(),
            style,
            align,
        });
    }

    pub fn fill(&mut self, rect: Rect) {
        self.push(DrawOp::FillRect { rect });
    }

    pub fn rule(&mut self, x1: i32, x2: i32, y: i32, thickness: u32) {
        self.push(DrawOp::Rule {
            x1,
            x2,
            y,
            thickness,
        });
    }

    /// All text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay every instruction onto a surface, in order.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for op in &self.ops {
            match op {
                DrawOp::Text {
                    rect,
                    text,
                    style,
                    align,
                } => surface.draw_text(*rect, text, *style, *align),
                DrawOp::FillRect { rect } => surface.fill_rect(*rect),
                DrawOp::Rule {
                    x1,
                    x2,
                    y,
                    thickness,
                } => surface.draw_rule(*x1, *x2, *y, *thickness),
            }
        }
    }

    /// Pretty-printed JSON of the page.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
