// src/application/note_board.rs
use std::collections::HashMap;

use anyhow::Result;
use tracing::debug;

use crate::domain::{Note, Priority};

/// Storage port for the note board. The board owns the authoritative
/// in-memory list; the store is a passive mirror rewritten on every
/// mutation and only consulted at startup.
pub trait NoteStore {
    /// Read the full note list. Missing or unreadable data yields an empty
    /// list, never an error.
    fn load(&self) -> Vec<Note>;

    /// Overwrite the stored list with `notes`.
    fn save(&self, notes: &[Note]) -> Result<()>;
}

impl<S: NoteStore> NoteStore for &S {
    fn load(&self) -> Vec<Note> {
        (**self).load()
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        (**self).save(notes)
    }
}

pub struct NoteBoard<S: NoteStore> {
    store: S,
    notes: Vec<Note>,
    next_id: i64,
}

impl<S: NoteStore> NoteBoard<S> {
    /// Load the persisted list once and take ownership of it.
    pub fn new(store: S) -> Self {
        let notes = store.load();
        // Ids stay unique for the lifetime of the board even after deletes.
        let next_id = notes.iter().map(|note| note.id).max().unwrap_or(0) + 1;
        debug!(count = notes.len(), next_id, "Loaded note board");
        Self {
            store,
            notes,
            next_id,
        }
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Append a note with a freshly minted id and persist the list.
    /// Whitespace-only text is ignored. Returns the new id when a note was
    /// actually added.
    pub fn add_note(&mut self, text: &str, priority: Priority) -> Result<Option<i64>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring note with empty text");
            return Ok(None);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note {
            id,
            text: text.to_string(),
            priority,
        });
        self.store.save(&self.notes)?;
        Ok(Some(id))
    }

    /// Remove the note with `id` and persist. Unknown ids are a no-op.
    /// Returns whether a note was removed.
    pub fn delete_note(&mut self, id: i64) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            debug!(note_id = id, "Delete ignored, no such note");
            return Ok(false);
        }
        self.store.save(&self.notes)?;
        Ok(true)
    }

    /// Move the note with `id` to another bucket, keeping its position and
    /// text, and persist. Unknown ids are a no-op. Returns whether a note
    /// changed.
    pub fn set_priority(&mut self, id: i64, priority: Priority) -> Result<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!(note_id = id, "Priority change ignored, no such note");
            return Ok(false);
        };
        note.priority = priority;
        self.store.save(&self.notes)?;
        Ok(true)
    }

    /// Group notes by bucket, preserving insertion order within each group.
    /// Every bucket is present in the result, empty or not. Recomputed on
    /// each call; the board never caches this view.
    pub fn partition_by_priority(&self) -> HashMap<Priority, Vec<&Note>> {
        let mut buckets: HashMap<Priority, Vec<&Note>> = Priority::ALL
            .iter()
            .map(|priority| (*priority, Vec::new()))
            .collect();
        for note in &self.notes {
            buckets.entry(note.priority).or_default().push(note);
        }
        buckets
    }
}
