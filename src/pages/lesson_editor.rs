//! Lesson editor page: step list, typed step editor, and content tooling.
//!
//! Addressed as `/lesson/{id}?courseId={course_id}`. The owning course id
//! rides in the query so the page can load the course, edit the one lesson
//! inside it, and persist through the same course update call.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::sentence_list::SentenceListEditor;
use crate::components::step_editor::StepEditor;
use crate::components::table_editor::TableEditor;
use crate::components::table_viewer::TableViewer;
use crate::net::types::{ContentItem, Step, StepType};
use crate::state::lesson::LessonEditorState;
use crate::state::sentences::Sentence;

/// Lesson editor page.
#[component]
pub fn LessonEditorPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let state = RwSignal::new(LessonEditorState::default());
    let last_loaded = RwSignal::new(None::<(String, String)>);

    let route_ids = move || {
        let lesson_id = params.read().get("id")?;
        let course_id = query.read().get("courseId")?;
        Some((course_id, lesson_id))
    };

    // Fetch once per (course, lesson) pair.
    Effect::new(move || {
        let Some((course_id, lesson_id)) = route_ids() else {
            return;
        };
        let key = (course_id.clone(), lesson_id.clone());
        if last_loaded.get().as_ref() == Some(&key) {
            return;
        }
        last_loaded.set(Some(key));

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let course = crate::net::api::fetch_course(&course_id).await;
                state.update(|s| s.finish_load(course, lesson_id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (course_id, lesson_id);
        }
    });

    let on_save = move |_| {
        let mut pushed = None;
        state.update(|s| pushed = s.begin_save());
        let Some(course) = pushed else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_course(&course).await {
                    Ok(()) => state.update(LessonEditorState::save_succeeded),
                    Err(err) => {
                        log::error!("lesson save failed: {err}");
                        state.update(LessonEditorState::save_failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = course;
        }
    };

    let on_step_update = Callback::new(move |step: Step| {
        state.update(|s| s.update_step(step));
    });
    let on_step_cancel = Callback::new(move |()| {
        state.update(|s| s.select_step(None));
    });
    let on_add_content = Callback::new(move |item: ContentItem| {
        state.update(|s| s.add_content(item));
    });
    let on_save_sentences = Callback::new(move |sentences: Vec<Sentence>| {
        state.update(|s| s.add_sentences(&sentences));
    });

    // Add-step picker.
    let new_step_index = RwSignal::new(0usize);
    let on_add_step = move |_| {
        let Some(step_type) = StepType::ALL.get(new_step_index.get()).copied() else {
            return;
        };
        state.update(|s| {
            s.add_step(step_type);
        });
    };

    let back_href = move || {
        state.with(|s| s.course.as_ref().map(|c| format!("/course/{}", c.id)))
            .unwrap_or_else(|| "/".to_owned())
    };

    let step_list = move || {
        let Some(steps) = state.with(|s| {
            s.lesson()
                .map(|l| l.steps.iter().map(|st| (st.id.clone(), st.step_type())).collect::<Vec<_>>())
        }) else {
            return view! { <p class="lesson-page__empty">"No steps"</p> }.into_any();
        };
        if steps.is_empty() {
            return view! { <p class="lesson-page__empty">"No steps yet. Add one below."</p> }
                .into_any();
        }
        steps
            .into_iter()
            .enumerate()
            .map(|(index, (id, step_type))| {
                let selected = {
                    let id = id.clone();
                    move || state.with(|s| s.selected_step.as_deref() == Some(id.as_str()))
                };
                let on_select = {
                    let id = id.clone();
                    move |_| state.update(|s| s.select_step(Some(id.clone())))
                };
                let on_delete = {
                    let id = id.clone();
                    move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        state.update(|s| s.delete_step(&id));
                    }
                };
                view! {
                    <div
                        class="step-row"
                        class=("step-row--selected", selected)
                        on:click=on_select
                    >
                        <span class="step-row__index">{format!("{}.", index + 1)}</span>
                        <span class="step-row__label">{step_type.label()}</span>
                        <button
                            class="btn btn--danger step-row__delete"
                            title="Delete step"
                            on:click=on_delete
                        >
                            "\u{00D7}"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    let editor_pane = move || {
        match state.with(|s| s.selected().cloned()) {
            Some(step) => view! {
                <StepEditor step=step on_update=on_step_update on_cancel=on_step_cancel/>
            }
            .into_any(),
            None => view! {
                <p class="lesson-page__hint">"Select a step to edit it."</p>
            }
            .into_any(),
        }
    };

    let content_list = move || {
        let items = state.with(|s| s.lesson().map(|l| l.content.clone()).unwrap_or_default());
        if items.is_empty() {
            return view! { <p class="lesson-page__empty">"No content yet"</p> }.into_any();
        }
        items
            .into_iter()
            .map(|item| {
                if item.item_type == "table" {
                    view! { <TableViewer item=item/> }.into_any()
                } else {
                    let text = item.text.as_str().unwrap_or_default().to_owned();
                    view! {
                        <div class="content-row">
                            <span class="content-row__text">{text}</span>
                            <span class="content-row__translation">{item.translation}</span>
                        </div>
                    }
                    .into_any()
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="lesson-page">
            <header class="lesson-page__header">
                <a class="lesson-page__back" href=back_href>
                    "\u{2190} Back to course"
                </a>
                <h1 class="lesson-page__title">
                    {move || {
                        state.with(|s| s.lesson().map(|l| l.title.clone()))
                            .unwrap_or_else(|| "Lesson".to_owned())
                    }}
                </h1>
                <Show when=move || state.with(LessonEditorState::is_dirty)>
                    <span class="lesson-page__dirty">"Unsaved changes"</span>
                </Show>
                <button
                    class="btn btn--primary lesson-page__save"
                    disabled=move || !state.with(LessonEditorState::can_save)
                    on:click=on_save
                >
                    {move || if state.with(|s| s.saving) { "Saving..." } else { "Save" }}
                </button>
            </header>

            {move || {
                state.with(|s| {
                    if s.loading {
                        Some(view! { <p class="lesson-page__status">"Loading lesson..."</p> }.into_any())
                    } else if s.lesson().is_none() {
                        Some(view! { <p class="lesson-page__status">"Lesson not found."</p> }.into_any())
                    } else {
                        None
                    }
                })
            }}

            <Show when=move || state.with(|s| !s.loading && s.lesson().is_some())>
                <div class="lesson-page__body">
                    <section class="lesson-page__steps">
                        <h2>"Steps"</h2>
                        {step_list}
                        <div class="lesson-page__add-step">
                            <select
                                class="lesson-page__step-type"
                                on:change=move |ev| {
                                    new_step_index
                                        .set(event_target_value(&ev).parse().unwrap_or(0));
                                }
                            >
                                {StepType::ALL
                                    .iter()
                                    .enumerate()
                                    .map(|(index, step_type)| {
                                        view! {
                                            <option value=index.to_string()>
                                                {step_type.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                            <button class="btn" on:click=on_add_step>
                                "+ Add step"
                            </button>
                        </div>
                    </section>

                    <section class="lesson-page__editor">
                        <h2>"Step editor"</h2>
                        {editor_pane}
                    </section>

                    <section class="lesson-page__content">
                        <h2>"Content"</h2>
                        {content_list}
                        <h3>"Sentences"</h3>
                        <SentenceListEditor on_save=on_save_sentences/>
                        <h3>"Vocabulary table"</h3>
                        <TableEditor on_add_content=on_add_content/>
                    </section>
                </div>
            </Show>
        </div>
    }
}
