//! Sentence list editor state.

#[cfg(test)]
#[path = "sentences_test.rs"]
mod sentences_test;

/// Ephemeral sentence/translation pair; identity is the generated id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    pub id: String,
    pub text: String,
    pub translation: String,
}

/// Component-local state for the sentence list editor: the collected list
/// plus the two draft fields feeding the add action.
#[derive(Clone, Debug, Default)]
pub struct SentenceListState {
    pub sentences: Vec<Sentence>,
    pub draft_text: String,
    pub draft_translation: String,
}

impl SentenceListState {
    /// Add requires both fields non-blank after trimming.
    pub fn can_add(&self) -> bool {
        !self.draft_text.trim().is_empty() && !self.draft_translation.trim().is_empty()
    }

    /// Append the draft as a new sentence with a generated id and clear the
    /// drafts. Returns false when a draft field is blank.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.sentences.push(Sentence {
            id: uuid::Uuid::new_v4().to_string(),
            text: self.draft_text.trim().to_owned(),
            translation: self.draft_translation.trim().to_owned(),
        });
        self.draft_text.clear();
        self.draft_translation.clear();
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.sentences.retain(|s| s.id != id);
    }
}
