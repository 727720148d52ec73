use super::*;
use crate::net::types::Language;

fn course(id: &str) -> Course {
    Course {
        id: id.to_owned(),
        title: "Spanish A1".to_owned(),
        author: "Ana".to_owned(),
        level: "Beginner".to_owned(),
        image: String::new(),
        description: String::new(),
        language: Language {
            name: "Spanish".to_owned(),
        },
        chapters: Vec::new(),
    }
}

fn loaded(id: &str) -> CourseEditorState {
    let mut state = CourseEditorState::default();
    state.finish_load(Some(course(id)));
    state
}

#[test]
fn starts_loading_and_clean() {
    let state = CourseEditorState::default();
    assert!(state.loading);
    assert!(!state.is_dirty());
    assert!(state.working.is_none());
}

#[test]
fn load_populates_both_copies_collapsed_and_clean() {
    let mut state = CourseEditorState::default();
    let mut c = course("c1");
    c.chapters.push(Chapter {
        id: "ch-1".to_owned(),
        title: "Basics".to_owned(),
        completed_lessons: 0,
        total_lessons: 0,
        lessons: Vec::new(),
    });
    state.finish_load(Some(c));

    assert!(!state.loading);
    assert!(!state.is_dirty());
    assert_eq!(state.snapshot, state.working);
    assert!(!state.is_expanded("ch-1"));
}

#[test]
fn metadata_edit_marks_dirty_and_leaves_snapshot() {
    let mut state = loaded("c1");
    state.set_title("Spanish A2".to_owned());

    assert!(state.is_dirty());
    assert_eq!(state.working.as_ref().unwrap().title, "Spanish A2");
    assert_eq!(state.snapshot.as_ref().unwrap().title, "Spanish A1");
}

#[test]
fn language_name_edit_marks_dirty() {
    let mut state = loaded("c1");
    state.set_language_name("Catalan".to_owned());
    assert!(state.is_dirty());
    assert_eq!(state.working.as_ref().unwrap().language.name, "Catalan");
}

#[test]
fn save_guard_requires_dirty_and_not_saving() {
    let mut state = loaded("c1");
    assert!(state.begin_save().is_none());

    state.set_author("Berta".to_owned());
    assert!(state.begin_save().is_some());
    assert!(state.saving);

    // A second save while one is in flight is refused.
    assert!(state.begin_save().is_none());
}

#[test]
fn successful_save_promotes_working_to_snapshot() {
    let mut state = loaded("c1");
    state.set_title("Spanish A2".to_owned());
    let pushed = state.begin_save().expect("dirty");
    state.save_succeeded();

    assert!(!state.saving);
    assert!(!state.is_dirty());
    assert_eq!(state.snapshot, state.working);
    assert_eq!(state.snapshot.as_ref().unwrap(), &pushed);
}

#[test]
fn failed_save_keeps_dirty_state() {
    let mut state = loaded("c1");
    state.set_title("Spanish A2".to_owned());
    state.begin_save().expect("dirty");
    state.save_failed();

    assert!(!state.saving);
    assert!(state.is_dirty());
    assert_eq!(state.snapshot.as_ref().unwrap().title, "Spanish A1");
    // The guard allows a retry.
    assert!(state.begin_save().is_some());
}

#[test]
fn add_chapter_rejects_blank_titles() {
    let mut state = loaded("c1");
    assert!(state.add_chapter("   ").is_none());
    assert!(!state.is_dirty());
}

#[test]
fn add_chapter_starts_expanded_with_zero_counters() {
    let mut state = loaded("c1");
    let id = state.add_chapter("  Grammar  ").expect("added");

    let working = state.working.as_ref().unwrap();
    assert_eq!(working.chapters.len(), 1);
    assert_eq!(working.chapters[0].title, "Grammar");
    assert_eq!(working.chapters[0].completed_lessons, 0);
    assert_eq!(working.chapters[0].total_lessons, 0);
    assert!(state.is_expanded(&id));
    assert!(state.is_dirty());
}

#[test]
fn chapter_rename_goes_through_the_edit_buffer() {
    let mut state = loaded("c1");
    let id = state.add_chapter("Grammar").expect("added");

    state.begin_chapter_edit(&id);
    assert_eq!(state.chapter_edit.as_ref().unwrap().buffer, "Grammar");

    state.set_chapter_edit_buffer("Verbs".to_owned());
    // The list is untouched until commit.
    assert_eq!(state.working.as_ref().unwrap().chapters[0].title, "Grammar");

    state.commit_chapter_edit();
    assert!(state.chapter_edit.is_none());
    assert_eq!(state.working.as_ref().unwrap().chapters[0].title, "Verbs");
}

#[test]
fn cancel_chapter_edit_discards_the_buffer() {
    let mut state = loaded("c1");
    let id = state.add_chapter("Grammar").expect("added");
    state.begin_chapter_edit(&id);
    state.set_chapter_edit_buffer("Verbs".to_owned());
    state.cancel_chapter_edit();

    assert!(state.chapter_edit.is_none());
    assert_eq!(state.working.as_ref().unwrap().chapters[0].title, "Grammar");
}

#[test]
fn delete_chapter_removes_only_the_target() {
    let mut state = loaded("c1");
    let keep_a = state.add_chapter("A").expect("added");
    let doomed = state.add_chapter("B").expect("added");
    let keep_b = state.add_chapter("C").expect("added");
    state.add_lesson(&keep_a).expect("lesson");
    state.add_lesson(&keep_b).expect("lesson");

    let before: Vec<Chapter> = state
        .working
        .as_ref()
        .unwrap()
        .chapters
        .iter()
        .filter(|ch| ch.id != doomed)
        .cloned()
        .collect();

    state.delete_chapter(&doomed);

    let after = &state.working.as_ref().unwrap().chapters;
    assert_eq!(after.len(), 2);
    assert_eq!(*after, before);
}

#[test]
fn add_lesson_scenario_increments_total_only() {
    let mut state = CourseEditorState::default();
    state.finish_load(Some(course("c1")));

    let chapter_id = state.add_chapter("Grammar").expect("added");
    state.add_lesson(&chapter_id).expect("lesson");

    let chapter = &state.working.as_ref().unwrap().chapters[0];
    assert_eq!(chapter.lessons.len(), 1);
    assert_eq!(chapter.total_lessons, 1);
    assert_eq!(chapter.completed_lessons, 0);
    assert_eq!(chapter.lessons[0].title, "New lesson");
}

#[test]
fn add_lesson_to_unknown_chapter_is_rejected() {
    let mut state = loaded("c1");
    assert!(state.add_lesson("missing").is_none());
}

#[test]
fn load_failure_leaves_no_working_copy() {
    let mut state = CourseEditorState::default();
    state.finish_load(None);
    assert!(!state.loading);
    assert!(state.working.is_none());
    assert!(state.begin_save().is_none());
}
