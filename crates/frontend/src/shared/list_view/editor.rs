use thiserror::Error;

/// Record shape the inline editor can draft field changes against.
pub trait Editable: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    /// Applies one draft field by name. Returns false when the record
    /// does not expose such a field.
    fn apply_field(&mut self, field: &str, value: &str) -> bool;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("no record is being edited")]
    NotEditing,
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// At most one in-flight edit of a single record.
///
/// The draft starts as a clone of the record handed to `begin`, so
/// `save` already yields the original with the drafted fields merged
/// in. The underlying collection is untouched until the caller
/// propagates the saved record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEditor<R: Editable> {
    draft: Option<R>,
}

impl<R: Editable> Default for RecordEditor<R> {
    fn default() -> Self {
        Self { draft: None }
    }
}

impl<R: Editable> RecordEditor<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an edit session, replacing any session already open.
    pub fn begin(&mut self, record: R) {
        self.draft = Some(record);
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.draft.as_ref().map(|d| d.id())
    }

    pub fn draft(&self) -> Option<&R> {
        self.draft.as_ref()
    }

    /// Mutates the draft only; invalid outside an open session.
    pub fn update_field(&mut self, field: &str, value: &str) -> Result<(), EditError> {
        let draft = self.draft.as_mut().ok_or(EditError::NotEditing)?;
        if draft.apply_field(field, value) {
            Ok(())
        } else {
            Err(EditError::UnknownField(field.to_string()))
        }
    }

    /// Closes the session and returns the merged record. The caller is
    /// responsible for pushing it into the list model and RemoteSync.
    pub fn save(&mut self) -> Result<R, EditError> {
        self.draft.take().ok_or(EditError::NotEditing)
    }

    /// Discards the draft without mutation.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        title: String,
        body: String,
    }

    impl Editable for Note {
        fn id(&self) -> &str {
            &self.id
        }

        fn apply_field(&mut self, field: &str, value: &str) -> bool {
            match field {
                "title" => self.title = value.to_string(),
                "body" => self.body = value.to_string(),
                _ => return false,
            }
            true
        }
    }

    fn note() -> Note {
        Note {
            id: "n1".into(),
            title: "draft".into(),
            body: "text".into(),
        }
    }

    #[test]
    fn save_merges_draft_fields_into_the_original() {
        let mut editor = RecordEditor::new();
        editor.begin(note());
        editor.update_field("title", "final").unwrap();

        let saved = editor.save().unwrap();
        assert_eq!(saved.title, "final");
        assert_eq!(saved.body, "text");
        assert!(!editor.is_open());
    }

    #[test]
    fn cancel_leaves_no_observable_change() {
        let original = note();
        let mut editor = RecordEditor::new();
        editor.begin(original.clone());
        editor.update_field("body", "scribbles").unwrap();
        editor.cancel();

        assert!(!editor.is_open());
        assert_eq!(editor.save(), Err(EditError::NotEditing));
        // The record handed to begin was cloned; the caller's copy is
        // untouched.
        assert_eq!(original, note());
    }

    #[test]
    fn update_field_outside_a_session_fails() {
        let mut editor: RecordEditor<Note> = RecordEditor::new();
        assert_eq!(
            editor.update_field("title", "x"),
            Err(EditError::NotEditing)
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut editor = RecordEditor::new();
        editor.begin(note());
        assert_eq!(
            editor.update_field("color", "red"),
            Err(EditError::UnknownField("color".into()))
        );
    }

    #[test]
    fn begin_replaces_an_open_session() {
        let mut editor = RecordEditor::new();
        editor.begin(note());
        editor.update_field("title", "lost").unwrap();

        let mut other = note();
        other.id = "n2".into();
        editor.begin(other);

        assert_eq!(editor.editing_id(), Some("n2"));
        assert_eq!(editor.save().unwrap().title, "draft");
    }
}
