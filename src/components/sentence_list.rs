//! Sentence list editor: collect sentence/translation pairs, then hand the
//! list to the caller on save.

use leptos::prelude::*;

use crate::state::sentences::{Sentence, SentenceListState};

/// List editor for sentences. The save action is a pass-through
/// notification carrying the current list; the caller decides what the
/// sentences become.
#[component]
pub fn SentenceListEditor(#[prop(into)] on_save: Callback<Vec<Sentence>>) -> impl IntoView {
    let state = RwSignal::new(SentenceListState::default());

    let on_add = move |_| {
        state.update(|s| {
            s.add();
        });
    };

    let on_save_click = move |_| {
        let sentences = state.get().sentences;
        if sentences.is_empty() {
            return;
        }
        on_save.run(sentences);
        state.update(|s| s.sentences.clear());
    };

    view! {
        <div class="sentence-list">
            <div class="sentence-list__items">
                {move || {
                    let sentences = state.get().sentences;
                    if sentences.is_empty() {
                        return view! {
                            <p class="sentence-list__empty">"No sentences yet"</p>
                        }
                        .into_any();
                    }
                    sentences
                        .iter()
                        .map(|sentence| {
                            let id = sentence.id.clone();
                            view! {
                                <div class="sentence-list__item">
                                    <span class="sentence-list__text">{sentence.text.clone()}</span>
                                    <span class="sentence-list__translation">
                                        {sentence.translation.clone()}
                                    </span>
                                    <button
                                        class="btn btn--danger sentence-list__remove"
                                        title="Remove sentence"
                                        on:click=move |_| state.update(|s| s.remove(&id))
                                    >
                                        "\u{00D7}"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="sentence-list__drafts">
                <input
                    class="sentence-list__input"
                    type="text"
                    placeholder="Sentence"
                    prop:value=move || state.get().draft_text
                    on:input=move |ev| state.update(|s| s.draft_text = event_target_value(&ev))
                />
                <input
                    class="sentence-list__input"
                    type="text"
                    placeholder="Translation"
                    prop:value=move || state.get().draft_translation
                    on:input=move |ev| {
                        state.update(|s| s.draft_translation = event_target_value(&ev))
                    }
                />
                <button
                    class="btn"
                    disabled=move || !state.get().can_add()
                    on:click=on_add
                >
                    "Add"
                </button>
            </div>

            <div class="sentence-list__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || state.get().sentences.is_empty()
                    on:click=on_save_click
                >
                    "Save sentences"
                </button>
            </div>
        </div>
    }
}
