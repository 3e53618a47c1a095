//! Sticky note store.
//!
//! # Responsibility
//! - Own the note collection and the panel visibility flag.
//! - Persist `stickyNotes` and `stickiesVisible` records.
//!
//! # Invariants
//! - Every committed mutation writes the whole note collection exactly once.
//! - Transient drag/resize motion never reaches this store; the gesture
//!   tracker commits final coordinates only.

use crate::model::note::{
    NoteColor, NoteId, NotePatch, StickyNote, DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH,
};
use crate::model::now_epoch_ms;
use crate::storage::{load_record, save_record, RecordKey, Storage};

pub struct NoteStore<'s> {
    storage: &'s dyn Storage,
    notes: Vec<StickyNote>,
    visible: bool,
}

impl<'s> NoteStore<'s> {
    pub fn load(storage: &'s dyn Storage) -> Self {
        Self {
            storage,
            notes: load_record(storage, RecordKey::StickyNotes).unwrap_or_default(),
            visible: load_record(storage, RecordKey::StickiesVisible).unwrap_or(false),
        }
    }

    pub fn notes(&self) -> &[StickyNote] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&StickyNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Creates an empty note of default size centered in the viewport,
    /// with a palette color chosen by cyclic position.
    pub fn create(&mut self, viewport_width: u32, viewport_height: u32) -> NoteId {
        let color = NoteColor::PALETTE[self.notes.len() % NoteColor::PALETTE.len()];
        let x = viewport_width as i32 / 2 - DEFAULT_NOTE_WIDTH as i32 / 2;
        let y = viewport_height as i32 / 2 - DEFAULT_NOTE_HEIGHT as i32 / 2;
        let note = StickyNote::new(x, y, color, now_epoch_ms());
        let id = note.id;
        self.notes.push(note);
        self.save();
        id
    }

    /// Applies a partial update; unknown ids are a no-op.
    pub fn update(&mut self, id: NoteId, patch: NotePatch) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(color) = patch.color {
            note.color = color;
        }
        if let Some(minimized) = patch.minimized {
            note.minimized = minimized;
        }
        self.save();
        true
    }

    /// Commits a final note position (gesture end).
    pub fn move_note(&mut self, id: NoteId, x: i32, y: i32) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.x = x;
        note.y = y;
        self.save();
        true
    }

    /// Commits a final note size (gesture end).
    pub fn resize_note(&mut self, id: NoteId, width: u32, height: u32) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.width = width;
        note.height = height;
        self.save();
        true
    }

    /// Advances the note color through the palette, wrapping at the end.
    pub fn cycle_color(&mut self, id: NoteId) -> Option<NoteColor> {
        let note = self.notes.iter_mut().find(|note| note.id == id)?;
        note.color = note.color.next();
        let color = note.color;
        self.save();
        Some(color)
    }

    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return false;
        }
        self.save();
        true
    }

    // ----- panel visibility -----

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        save_record(self.storage, RecordKey::StickiesVisible, &self.visible);
        self.visible
    }

    fn save(&self) {
        save_record(self.storage, RecordKey::StickyNotes, &self.notes);
    }
}
