//! Course editor state: snapshot/working copy with explicit change tracking.
//!
//! DESIGN
//! ======
//! The last-saved course is kept as `snapshot` and all edits go to `working`.
//! Instead of deep-comparing the two on every keystroke, each mutation
//! records a `ChangeKey` for the entity it touched; the editor is dirty
//! while the set is non-empty. A successful save promotes `working` to the
//! new snapshot and clears the set; a failed save leaves it intact so the
//! user keeps their edits and can retry.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use std::collections::HashSet;

use crate::net::types::{Chapter, Course, Lesson};

/// Which entity a local edit touched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKey {
    /// Course-level metadata (title, author, level, image, description,
    /// language name).
    Metadata,
    /// The chapter list itself (add/delete).
    ChapterList,
    /// One chapter's own fields or its lesson list.
    Chapter(String),
}

/// In-flight rename of one chapter, decoupled from the chapter list until
/// committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterEdit {
    pub chapter_id: String,
    pub buffer: String,
}

/// Page-level state for the course editor.
#[derive(Clone, Debug)]
pub struct CourseEditorState {
    pub snapshot: Option<Course>,
    pub working: Option<Course>,
    pub loading: bool,
    pub saving: bool,
    /// Chapter ids currently expanded; everything starts collapsed.
    pub expanded: HashSet<String>,
    pub chapter_edit: Option<ChapterEdit>,
    changes: HashSet<ChangeKey>,
}

impl Default for CourseEditorState {
    fn default() -> Self {
        Self {
            snapshot: None,
            working: None,
            loading: true,
            saving: false,
            expanded: HashSet::new(),
            chapter_edit: None,
            changes: HashSet::new(),
        }
    }
}

impl CourseEditorState {
    /// Install the fetch result. `None` means the course was not found.
    pub fn finish_load(&mut self, course: Option<Course>) {
        self.loading = false;
        self.snapshot.clone_from(&course);
        self.working = course;
        self.expanded.clear();
        self.chapter_edit = None;
        self.changes.clear();
    }

    pub fn is_dirty(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn can_save(&self) -> bool {
        self.is_dirty() && !self.saving
    }

    // Metadata setters. Each mutates the working copy only and records the
    // change; the snapshot is never touched.

    pub fn set_title(&mut self, value: String) {
        if let Some(course) = &mut self.working {
            course.title = value;
            self.changes.insert(ChangeKey::Metadata);
        }
    }

    pub fn set_author(&mut self, value: String) {
        if let Some(course) = &mut self.working {
            course.author = value;
            self.changes.insert(ChangeKey::Metadata);
        }
    }

    pub fn set_level(&mut self, value: String) {
        if let Some(course) = &mut self.working {
            course.level = value;
            self.changes.insert(ChangeKey::Metadata);
        }
    }

    pub fn set_image(&mut self, value: String) {
        if let Some(course) = &mut self.working {
            course.image = value;
            self.changes.insert(ChangeKey::Metadata);
        }
    }

    pub fn set_description(&mut self, value: String) {
        if let Some(course) = &mut self.working {
            course.description = value;
            self.changes.insert(ChangeKey::Metadata);
        }
    }

    pub fn set_language_name(&mut self, value: String) {
        if let Some(course) = &mut self.working {
            course.language.name = value;
            self.changes.insert(ChangeKey::Metadata);
        }
    }

    pub fn is_expanded(&self, chapter_id: &str) -> bool {
        self.expanded.contains(chapter_id)
    }

    pub fn toggle_chapter(&mut self, chapter_id: &str) {
        if !self.expanded.remove(chapter_id) {
            self.expanded.insert(chapter_id.to_owned());
        }
    }

    /// Start renaming a chapter: the buffer is seeded from the current title
    /// and edited independently of the chapter list.
    pub fn begin_chapter_edit(&mut self, chapter_id: &str) {
        let Some(title) = self
            .working
            .as_ref()
            .and_then(|c| c.chapters.iter().find(|ch| ch.id == chapter_id))
            .map(|ch| ch.title.clone())
        else {
            return;
        };
        self.chapter_edit = Some(ChapterEdit {
            chapter_id: chapter_id.to_owned(),
            buffer: title,
        });
    }

    pub fn set_chapter_edit_buffer(&mut self, value: String) {
        if let Some(edit) = &mut self.chapter_edit {
            edit.buffer = value;
        }
    }

    pub fn cancel_chapter_edit(&mut self) {
        self.chapter_edit = None;
    }

    /// Write the edit buffer into the matching chapter and exit edit mode.
    pub fn commit_chapter_edit(&mut self) {
        let Some(edit) = self.chapter_edit.take() else {
            return;
        };
        let Some(course) = &mut self.working else {
            return;
        };
        if let Some(chapter) = course.chapters.iter_mut().find(|ch| ch.id == edit.chapter_id) {
            chapter.title = edit.buffer;
            self.changes.insert(ChangeKey::Chapter(edit.chapter_id));
        }
    }

    /// Append a chapter with a generated id and zero progress counters.
    /// Rejects blank titles. The new chapter starts expanded.
    pub fn add_chapter(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let course = self.working.as_mut()?;
        let id = uuid::Uuid::new_v4().to_string();
        course.chapters.push(Chapter {
            id: id.clone(),
            title: title.to_owned(),
            completed_lessons: 0,
            total_lessons: 0,
            lessons: Vec::new(),
        });
        self.expanded.insert(id.clone());
        self.changes.insert(ChangeKey::ChapterList);
        Some(id)
    }

    /// Remove a chapter by id. No confirmation, no cascade bookkeeping.
    pub fn delete_chapter(&mut self, chapter_id: &str) {
        let Some(course) = &mut self.working else {
            return;
        };
        let before = course.chapters.len();
        course.chapters.retain(|ch| ch.id != chapter_id);
        if course.chapters.len() != before {
            self.expanded.remove(chapter_id);
            self.changes.insert(ChangeKey::ChapterList);
        }
    }

    /// Append a placeholder lesson to the named chapter and bump its
    /// `total_lessons` counter. `completed_lessons` is untouched.
    pub fn add_lesson(&mut self, chapter_id: &str) -> Option<String> {
        let course = self.working.as_mut()?;
        let chapter = course.chapters.iter_mut().find(|ch| ch.id == chapter_id)?;
        let id = uuid::Uuid::new_v4().to_string();
        chapter.lessons.push(Lesson {
            id: id.clone(),
            title: "New lesson".to_owned(),
            description: String::new(),
            steps: Vec::new(),
            content: Vec::new(),
        });
        chapter.total_lessons += 1;
        self.changes.insert(ChangeKey::Chapter(chapter_id.to_owned()));
        Some(id)
    }

    /// Enter the saving state and hand back the course to persist.
    /// Returns `None` when there is nothing to save or a save is in flight.
    pub fn begin_save(&mut self) -> Option<Course> {
        if !self.can_save() {
            return None;
        }
        self.saving = true;
        self.working.clone()
    }

    /// Promote the working copy to the new snapshot.
    pub fn save_succeeded(&mut self) {
        self.saving = false;
        self.snapshot.clone_from(&self.working);
        self.changes.clear();
    }

    /// Keep the change set so the user retains unsaved edits and may retry.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }
}
