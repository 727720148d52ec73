use super::*;
use crate::net::types::{Chapter, Language, StepData, StepType};

fn course_with_lesson() -> (Course, String) {
    let lesson = Lesson {
        id: "l-1".to_owned(),
        title: "Greetings".to_owned(),
        description: String::new(),
        steps: Vec::new(),
        content: Vec::new(),
    };
    let course = Course {
        id: "c1".to_owned(),
        title: "Spanish A1".to_owned(),
        author: "Ana".to_owned(),
        level: "Beginner".to_owned(),
        image: String::new(),
        description: String::new(),
        language: Language {
            name: "Spanish".to_owned(),
        },
        chapters: vec![Chapter {
            id: "ch-1".to_owned(),
            title: "Basics".to_owned(),
            completed_lessons: 0,
            total_lessons: 1,
            lessons: vec![lesson],
        }],
    };
    (course, "l-1".to_owned())
}

fn loaded() -> LessonEditorState {
    let (course, lesson_id) = course_with_lesson();
    let mut state = LessonEditorState::default();
    state.finish_load(Some(course), lesson_id);
    state
}

#[test]
fn load_finds_the_lesson_and_is_clean() {
    let state = loaded();
    assert!(!state.loading);
    assert!(!state.is_dirty());
    assert_eq!(state.lesson().unwrap().title, "Greetings");
    assert!(state.selected().is_none());
}

#[test]
fn unknown_lesson_id_resolves_to_none() {
    let (course, _) = course_with_lesson();
    let mut state = LessonEditorState::default();
    state.finish_load(Some(course), "missing".to_owned());
    assert!(state.lesson().is_none());
}

#[test]
fn add_step_appends_template_and_selects_it() {
    let mut state = loaded();
    let id = state.add_step(StepType::LessonInformation).expect("added");

    let lesson = state.lesson().unwrap();
    assert_eq!(lesson.steps.len(), 1);
    assert_eq!(
        lesson.steps[0].data,
        StepData::template(StepType::LessonInformation)
    );
    assert_eq!(state.selected_step.as_deref(), Some(id.as_str()));
    assert!(state.is_dirty());
}

#[test]
fn update_step_replaces_by_id() {
    let mut state = loaded();
    let id = state.add_step(StepType::LessonInformation).expect("added");
    state.begin_save().expect("dirty");
    state.save_succeeded();
    assert!(!state.is_dirty());

    let mut step = state.selected().unwrap().clone();
    let StepData::LessonInformation(ref mut info) = step.data else {
        panic!("wrong variant");
    };
    info.title = "Edited".to_owned();
    state.update_step(step);

    let lesson = state.lesson().unwrap();
    let StepData::LessonInformation(ref info) = lesson.steps[0].data else {
        panic!("wrong variant");
    };
    assert_eq!(info.title, "Edited");
    assert_eq!(lesson.steps[0].id, id);
    assert!(state.is_dirty());
}

#[test]
fn delete_step_clears_matching_selection() {
    let mut state = loaded();
    let id = state.add_step(StepType::MatchingPairs).expect("added");
    state.delete_step(&id);

    assert!(state.lesson().unwrap().steps.is_empty());
    assert!(state.selected_step.is_none());
    assert!(state.is_dirty());
}

#[test]
fn add_content_marks_dirty() {
    let mut state = loaded();
    let doc = crate::net::types::TableDocument {
        headers: vec!["A".to_owned()],
        rows: vec![vec!["1".to_owned()]],
    };
    state.add_content(ContentItem::table(&doc));

    assert_eq!(state.lesson().unwrap().content.len(), 1);
    assert!(state.is_dirty());
}

#[test]
fn sentence_save_passes_through_as_content_items() {
    let mut state = loaded();
    let sentences = vec![
        Sentence {
            id: "s-1".to_owned(),
            text: "Hola".to_owned(),
            translation: "Hello".to_owned(),
        },
        Sentence {
            id: "s-2".to_owned(),
            text: "Adiós".to_owned(),
            translation: "Goodbye".to_owned(),
        },
    ];
    state.add_sentences(&sentences);

    let content = &state.lesson().unwrap().content;
    assert_eq!(content.len(), 2);
    assert_eq!(content[0].item_type, "sentence");
    assert_eq!(content[0].text, serde_json::json!("Hola"));
    assert_eq!(content[1].translation, "Goodbye");
    assert!(state.is_dirty());
}

#[test]
fn empty_sentence_save_does_not_mark_dirty() {
    let mut state = loaded();
    state.add_sentences(&[]);
    assert!(!state.is_dirty());
}

#[test]
fn save_lifecycle_mirrors_the_course_editor() {
    let mut state = loaded();
    assert!(state.begin_save().is_none());

    state.add_step(StepType::WordOrdering).expect("added");
    let pushed = state.begin_save().expect("dirty");
    assert_eq!(pushed.id, "c1");
    assert!(state.begin_save().is_none());

    state.save_failed();
    assert!(state.is_dirty());

    state.begin_save().expect("retry");
    state.save_succeeded();
    assert!(!state.is_dirty());
}
