//! Notes collection and selection state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to freshly created notes.
pub const NEW_NOTE_TITLE: &str = "New Note";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One note.
pub struct Note {
    /// Unique id derived from a monotonic millisecond timestamp.
    pub id: String,
    /// Title line.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Time of the last edit, stored as RFC 3339 under `date`.
    #[serde(rename = "date")]
    pub last_modified: DateTime<Utc>,
}

impl Note {
    /// Title shown in the list, with a placeholder for empty titles.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// First content line shown under the title in the list.
    pub fn preview(&self) -> &str {
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("No additional text")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Notes newest-first plus the active selection.
pub struct NotesBook {
    notes: Vec<Note>,
    active_id: Option<String>,
}

impl NotesBook {
    /// Builds a book from the stored collection. Only a missing collection is seeded with the
    /// welcome note; a stored empty list stays empty.
    ///
    /// The first note starts selected.
    pub fn from_stored(stored: Option<Vec<Note>>, now: DateTime<Utc>) -> Self {
        let notes = stored.unwrap_or_else(|| vec![welcome_note(now)]);
        let active_id = notes.first().map(|note| note.id.clone());
        Self { notes, active_id }
    }

    /// All notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Id of the selected note.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The selected note.
    pub fn active(&self) -> Option<&Note> {
        let id = self.active_id.as_deref()?;
        self.notes.iter().find(|note| note.id == id)
    }

    /// Prepends an empty note and selects it.
    pub fn create(&mut self, id: String, now: DateTime<Utc>) {
        self.notes.insert(
            0,
            Note {
                id: id.clone(),
                title: NEW_NOTE_TITLE.to_string(),
                content: String::new(),
                last_modified: now,
            },
        );
        self.active_id = Some(id);
    }

    /// Selects an existing note. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.notes.iter().any(|note| note.id == id) {
            self.active_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Replaces a note's title.
    pub fn set_title(&mut self, id: &str, title: String, now: DateTime<Utc>) -> bool {
        self.edit(id, now, |note| note.title = title)
    }

    /// Replaces a note's content.
    pub fn set_content(&mut self, id: &str, content: String, now: DateTime<Utc>) -> bool {
        self.edit(id, now, |note| note.content = content)
    }

    /// Removes a note. Deleting the selected note clears the selection.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.notes.len() != before
    }

    fn edit(&mut self, id: &str, now: DateTime<Utc>, apply: impl FnOnce(&mut Note)) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        apply(note);
        note.last_modified = now;
        true
    }
}

fn welcome_note(now: DateTime<Utc>) -> Note {
    Note {
        id: "1".to_string(),
        title: "Welcome".to_string(),
        content: "Welcome to your AI-powered Notes app.".to_string(),
        last_modified: now,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn empty_storage_seeds_welcome_note() {
        let book = NotesBook::from_stored(None, at(0));
        assert_eq!(book.notes().len(), 1);
        assert_eq!(book.notes()[0].title, "Welcome");
        assert_eq!(book.active_id(), Some("1"));
    }

    #[test]
    fn stored_empty_list_is_not_reseeded() {
        let book = NotesBook::from_stored(Some(Vec::new()), at(0));
        assert!(book.notes().is_empty());
        assert_eq!(book.active_id(), None);
    }

    #[test]
    fn create_prepends_and_selects() {
        let mut book = NotesBook::from_stored(None, at(0));
        book.create("1700000000123".to_string(), at(5));
        assert_eq!(book.notes()[0].id, "1700000000123");
        assert_eq!(book.notes()[0].title, NEW_NOTE_TITLE);
        assert_eq!(book.notes()[0].content, "");
        assert_eq!(book.active().map(|n| n.id.as_str()), Some("1700000000123"));
    }

    #[test]
    fn edits_refresh_last_modified_in_place() {
        let mut book = NotesBook::from_stored(None, at(0));
        book.create("2".to_string(), at(1));
        assert!(book.set_content("1", "changed".to_string(), at(9)));
        assert!(book.set_title("1", "Renamed".to_string(), at(10)));
        let welcome = &book.notes()[1];
        assert_eq!(welcome.content, "changed");
        assert_eq!(welcome.title, "Renamed");
        assert_eq!(welcome.last_modified, at(10));
        assert!(!book.set_title("missing", "x".to_string(), at(11)));
    }

    #[test]
    fn deleting_active_note_clears_selection() {
        let mut book = NotesBook::from_stored(None, at(0));
        book.create("2".to_string(), at(1));
        assert!(book.delete("2"));
        assert_eq!(book.active_id(), None);
        assert_eq!(book.active(), None);
        assert_eq!(book.notes().len(), 1);

        assert!(book.select("1"));
        assert!(!book.delete("missing"));
        assert_eq!(book.active_id(), Some("1"));
    }

    #[test]
    fn deleting_other_note_keeps_selection() {
        let mut book = NotesBook::from_stored(None, at(0));
        book.create("2".to_string(), at(1));
        book.delete("1");
        assert_eq!(book.active_id(), Some("2"));
    }

    #[test]
    fn list_labels_fall_back_to_placeholders() {
        let note = Note {
            id: "x".to_string(),
            title: "  ".to_string(),
            content: "\n\n  second line\nthird".to_string(),
            last_modified: at(0),
        };
        assert_eq!(note.display_title(), "Untitled");
        assert_eq!(note.preview(), "second line");

        let empty = Note {
            content: String::new(),
            ..note
        };
        assert_eq!(empty.preview(), "No additional text");
    }

    #[test]
    fn dates_serialize_as_rfc3339_under_date_key() {
        let book = NotesBook::from_stored(None, at(0));
        let json = serde_json::to_value(book.notes()).expect("serialize");
        assert_eq!(json[0]["date"], "2023-11-14T22:13:20Z");
        let back: Vec<Note> = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, book.notes());
    }
}
