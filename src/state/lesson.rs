//! Lesson editor state: step CRUD and content tooling for one lesson.
//!
//! The lesson editor is addressed by lesson id plus the owning course id, so
//! it loads the whole course, edits the one lesson inside the working copy,
//! and persists through the same course update call as the course editor.

#[cfg(test)]
#[path = "lesson_test.rs"]
mod lesson_test;

use std::collections::HashSet;

use crate::net::types::{ContentItem, Course, Lesson, Step, StepType};
use crate::state::sentences::Sentence;

/// Page-level state for the lesson editor.
#[derive(Clone, Debug)]
pub struct LessonEditorState {
    pub course: Option<Course>,
    pub lesson_id: Option<String>,
    pub selected_step: Option<String>,
    pub loading: bool,
    pub saving: bool,
    changed_steps: HashSet<String>,
    content_changed: bool,
}

impl Default for LessonEditorState {
    fn default() -> Self {
        Self {
            course: None,
            lesson_id: None,
            selected_step: None,
            loading: true,
            saving: false,
            changed_steps: HashSet::new(),
            content_changed: false,
        }
    }
}

impl LessonEditorState {
    pub fn finish_load(&mut self, course: Option<Course>, lesson_id: String) {
        self.loading = false;
        self.course = course;
        self.lesson_id = Some(lesson_id);
        self.selected_step = None;
        self.changed_steps.clear();
        self.content_changed = false;
    }

    pub fn is_dirty(&self) -> bool {
        !self.changed_steps.is_empty() || self.content_changed
    }

    pub fn can_save(&self) -> bool {
        self.is_dirty() && !self.saving
    }

    /// The lesson under edit, wherever it lives in the chapter tree.
    pub fn lesson(&self) -> Option<&Lesson> {
        let lesson_id = self.lesson_id.as_deref()?;
        self.course
            .as_ref()?
            .chapters
            .iter()
            .flat_map(|ch| ch.lessons.iter())
            .find(|l| l.id == lesson_id)
    }

    fn lesson_mut(&mut self) -> Option<&mut Lesson> {
        let lesson_id = self.lesson_id.clone()?;
        self.course
            .as_mut()?
            .chapters
            .iter_mut()
            .flat_map(|ch| ch.lessons.iter_mut())
            .find(|l| l.id == lesson_id)
    }

    pub fn select_step(&mut self, step_id: Option<String>) {
        self.selected_step = step_id;
    }

    pub fn selected(&self) -> Option<&Step> {
        let step_id = self.selected_step.as_deref()?;
        self.lesson()?.steps.iter().find(|s| s.id == step_id)
    }

    /// Append a step carrying the template payload for its type and select
    /// it for editing.
    pub fn add_step(&mut self, step_type: StepType) -> Option<String> {
        let step = Step::new(step_type);
        let id = step.id.clone();
        self.lesson_mut()?.steps.push(step);
        self.changed_steps.insert(id.clone());
        self.selected_step = Some(id.clone());
        Some(id)
    }

    /// Replace a step wholesale (the step editor emits full steps).
    pub fn update_step(&mut self, step: Step) {
        let Some(lesson) = self.lesson_mut() else {
            return;
        };
        if let Some(slot) = lesson.steps.iter_mut().find(|s| s.id == step.id) {
            let id = step.id.clone();
            *slot = step;
            self.changed_steps.insert(id);
        }
    }

    pub fn delete_step(&mut self, step_id: &str) {
        let Some(lesson) = self.lesson_mut() else {
            return;
        };
        let before = lesson.steps.len();
        lesson.steps.retain(|s| s.id != step_id);
        if lesson.steps.len() != before {
            self.changed_steps.insert(step_id.to_owned());
            if self.selected_step.as_deref() == Some(step_id) {
                self.selected_step = None;
            }
        }
    }

    /// Append one content item (table editor submissions land here).
    pub fn add_content(&mut self, item: ContentItem) {
        if let Some(lesson) = self.lesson_mut() {
            lesson.content.push(item);
            self.content_changed = true;
        }
    }

    /// The sentence editor's save action passes its list through; each
    /// sentence becomes a sentence-typed content item.
    pub fn add_sentences(&mut self, sentences: &[Sentence]) {
        let Some(lesson) = self.lesson_mut() else {
            return;
        };
        for sentence in sentences {
            lesson
                .content
                .push(ContentItem::sentence(&sentence.text, &sentence.translation));
        }
        if !sentences.is_empty() {
            self.content_changed = true;
        }
    }

    /// Enter the saving state and hand back the course to persist.
    pub fn begin_save(&mut self) -> Option<Course> {
        if !self.can_save() {
            return None;
        }
        self.saving = true;
        self.course.clone()
    }

    pub fn save_succeeded(&mut self) {
        self.saving = false;
        self.changed_steps.clear();
        self.content_changed = false;
    }

    pub fn save_failed(&mut self) {
        self.saving = false;
    }
}
