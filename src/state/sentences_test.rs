use super::*;

#[test]
fn add_requires_both_fields() {
    let mut state = SentenceListState::default();
    state.draft_text = "Hola".to_owned();
    state.draft_translation = "   ".to_owned();
    assert!(!state.can_add());
    assert!(!state.add());
    assert!(state.sentences.is_empty());

    state.draft_text = "  ".to_owned();
    state.draft_translation = "Hello".to_owned();
    assert!(!state.add());
    assert!(state.sentences.is_empty());
}

#[test]
fn add_trims_stores_and_clears_drafts() {
    let mut state = SentenceListState::default();
    state.draft_text = "  Hola  ".to_owned();
    state.draft_translation = " Hello ".to_owned();
    assert!(state.add());

    assert_eq!(state.sentences.len(), 1);
    assert_eq!(state.sentences[0].text, "Hola");
    assert_eq!(state.sentences[0].translation, "Hello");
    assert!(state.draft_text.is_empty());
    assert!(state.draft_translation.is_empty());
}

#[test]
fn added_sentences_get_unique_ids() {
    let mut state = SentenceListState::default();
    for i in 0..5 {
        state.draft_text = format!("text {i}");
        state.draft_translation = format!("translation {i}");
        assert!(state.add());
    }

    let mut ids: Vec<&str> = state.sentences.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn remove_by_id_keeps_the_rest() {
    let mut state = SentenceListState::default();
    for i in 0..3 {
        state.draft_text = format!("text {i}");
        state.draft_translation = format!("translation {i}");
        state.add();
    }
    let doomed = state.sentences[1].id.clone();
    state.remove(&doomed);

    assert_eq!(state.sentences.len(), 2);
    assert_eq!(state.sentences[0].text, "text 0");
    assert_eq!(state.sentences[1].text, "text 2");
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut state = SentenceListState::default();
    state.draft_text = "Hola".to_owned();
    state.draft_translation = "Hello".to_owned();
    state.add();
    state.remove("missing");
    assert_eq!(state.sentences.len(), 1);
}
