use crate::models::{MoodEntry, MoodLevel};
use chrono::{DateTime, Utc};

/// Draft state of the mood form: a selected level and a free-text note.
#[derive(Debug, Default, Clone)]
pub struct MoodTracker {
    selected: Option<MoodLevel>,
    note: String,
}

impl MoodTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, level: MoodLevel) {
        self.selected = Some(level);
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn selected(&self) -> Option<MoodLevel> {
        self.selected
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Builds an entry from the draft and clears it. Without a selected level
    /// nothing happens and the draft is left as it was.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Option<MoodEntry> {
        let mood = self.selected.take()?;
        let note = std::mem::take(&mut self.note);

        Some(MoodEntry {
            date: now,
            mood,
            note: (!note.trim().is_empty()).then_some(note),
        })
    }
}
