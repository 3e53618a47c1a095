//! Sticky note model.
//!
//! # Responsibility
//! - Model free-floating notes with pixel position, size and a palette color.
//!
//! # Invariants
//! - Notes are fully independent entities; nothing references them and they
//!   reference nothing.
//! - `color` always holds a palette member; cycling wraps in palette order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a sticky note.
pub type NoteId = Uuid;

/// Default note size in pixels.
pub const DEFAULT_NOTE_WIDTH: u32 = 250;
pub const DEFAULT_NOTE_HEIGHT: u32 = 200;

/// The fixed sticky note palette, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}

impl NoteColor {
    pub const PALETTE: [NoteColor; 5] = [
        NoteColor::Yellow,
        NoteColor::Pink,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Purple,
    ];

    /// Next palette color, wrapping after the last.
    pub fn next(self) -> Self {
        let index = Self::PALETTE
            .iter()
            .position(|color| *color == self)
            .unwrap_or(0);
        Self::PALETTE[(index + 1) % Self::PALETTE.len()]
    }
}

/// A free-floating sticky note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyNote {
    pub id: NoteId,
    pub content: String,
    /// Top-left corner in pixels; may go negative while dragging off-edge.
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub color: NoteColor,
    #[serde(default)]
    pub minimized: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl StickyNote {
    /// Creates an empty note of default size at the given position.
    pub fn new(x: i32, y: i32, color: NoteColor, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: String::new(),
            x,
            y,
            width: DEFAULT_NOTE_WIDTH,
            height: DEFAULT_NOTE_HEIGHT,
            color,
            minimized: false,
            created_at,
        }
    }
}

/// Partial update applied by `NoteStore::update`.
///
/// `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub content: Option<String>,
    pub color: Option<NoteColor>,
    pub minimized: Option<bool>,
}
