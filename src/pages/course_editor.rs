//! Course editor page: metadata form, chapter list, and lesson lists.
//!
//! STATE
//! =====
//! `loading -> loaded (clean) <-> loaded (dirty) -> saving -> loaded
//! (clean | dirty-on-failure)`. All mutation goes through
//! `CourseEditorState` so the change set stays authoritative; this page is
//! wiring and layout. The chapter list renders off a `Memo` so metadata
//! keystrokes do not rebuild the cards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::field_input::{TextAreaField, TextField};
use crate::net::types::{Chapter, Course};
use crate::state::course::CourseEditorState;

fn course_field(
    state: RwSignal<CourseEditorState>,
    field: fn(&Course) -> &String,
) -> Signal<String> {
    Signal::derive(move || {
        state.with(|s| s.working.as_ref().map(|course| field(course).clone()))
            .unwrap_or_default()
    })
}

/// Course editor page. Reads the course id from the route parameter,
/// fetches once per id, and persists on the explicit save action only.
#[component]
pub fn CourseEditorPage() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(CourseEditorState::default());
    let last_loaded = RwSignal::new(None::<String>);

    let course_id = move || params.read().get("id");

    // Fetch once per course id.
    Effect::new(move || {
        let Some(id) = course_id() else {
            return;
        };
        if last_loaded.get().as_deref() == Some(id.as_str()) {
            return;
        }
        last_loaded.set(Some(id.clone()));

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let course = crate::net::api::fetch_course(&id).await;
                state.update(|s| s.finish_load(course));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
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
                    Ok(()) => state.update(CourseEditorState::save_succeeded),
                    Err(err) => {
                        log::error!("course save failed: {err}");
                        state.update(CourseEditorState::save_failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = course;
        }
    };

    let new_chapter_title = RwSignal::new(String::new());
    let add_chapter = move || {
        let title = new_chapter_title.get();
        let mut added = None;
        state.update(|s| added = s.add_chapter(&title));
        if added.is_some() {
            new_chapter_title.set(String::new());
        }
    };

    // Re-renders the card list only when the chapters themselves change,
    // not on every metadata keystroke.
    let chapters = Memo::new(move |_| {
        state.with(|s| {
            s.working
                .as_ref()
                .map(|c| (c.id.clone(), c.chapters.clone()))
        })
    });

    let status = move || {
        state.with(|s| {
            if s.loading {
                Some(view! { <p class="course-page__status">"Loading course..."</p> }.into_any())
            } else if s.working.is_none() {
                Some(view! { <p class="course-page__status">"Course not found."</p> }.into_any())
            } else {
                None
            }
        })
    };

    view! {
        <div class="course-page">
            <header class="course-page__header">
                <a class="course-page__back" href="/">
                    "\u{2190} All courses"
                </a>
                <h1 class="course-page__title">
                    {move || {
                        state.with(|s| s.working.as_ref().map(|c| c.title.clone()))
                            .unwrap_or_else(|| "Course".to_owned())
                    }}
                </h1>
                <Show when=move || state.with(CourseEditorState::is_dirty)>
                    <span class="course-page__dirty">"Unsaved changes"</span>
                </Show>
                <button
                    class="btn btn--primary course-page__save"
                    disabled=move || !state.with(CourseEditorState::can_save)
                    on:click=on_save
                >
                    {move || if state.with(|s| s.saving) { "Saving..." } else { "Save" }}
                </button>
            </header>

            {status}

            <Show when=move || state.with(|s| !s.loading && s.working.is_some())>
                <div class="course-page__body">
                    <section class="course-page__metadata">
                        <h2>"Details"</h2>
                        <TextField
                            label="Title"
                            value=course_field(state, |c| &c.title)
                            on_input=Callback::new(move |v| state.update(|s| s.set_title(v)))
                        />
                        <TextField
                            label="Author"
                            value=course_field(state, |c| &c.author)
                            on_input=Callback::new(move |v| state.update(|s| s.set_author(v)))
                        />
                        <TextField
                            label="Level"
                            value=course_field(state, |c| &c.level)
                            placeholder="Beginner, Intermediate..."
                            on_input=Callback::new(move |v| state.update(|s| s.set_level(v)))
                        />
                        <TextField
                            label="Language"
                            value=course_field(state, |c| &c.language.name)
                            on_input=Callback::new(move |v| {
                                state.update(|s| s.set_language_name(v))
                            })
                        />
                        <TextField
                            label="Image URL"
                            value=course_field(state, |c| &c.image)
                            on_input=Callback::new(move |v| state.update(|s| s.set_image(v)))
                        />
                        <TextAreaField
                            label="Description"
                            value=course_field(state, |c| &c.description)
                            on_input=Callback::new(move |v| {
                                state.update(|s| s.set_description(v))
                            })
                        />
                    </section>

                    <section class="course-page__chapters">
                        <h2>"Chapters"</h2>
                        {move || {
                            chapters
                                .get()
                                .map(|(course_id, list)| {
                                    list.into_iter()
                                        .map(|chapter| {
                                            view! {
                                                <ChapterCard
                                                    chapter=chapter
                                                    course_id=course_id.clone()
                                                    state=state
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                        <div class="course-page__add-chapter">
                            <input
                                class="course-page__chapter-input"
                                type="text"
                                placeholder="New chapter title"
                                prop:value=move || new_chapter_title.get()
                                on:input=move |ev| new_chapter_title.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_chapter();
                                    }
                                }
                            />
                            <button
                                class="btn"
                                disabled=move || new_chapter_title.get().trim().is_empty()
                                on:click=move |_| add_chapter()
                            >
                                "+ Add chapter"
                            </button>
                        </div>
                    </section>
                </div>
            </Show>
        </div>
    }
}

/// One chapter: collapsible header with rename/delete/add-lesson actions and
/// the lesson list when expanded.
#[component]
fn ChapterCard(
    chapter: Chapter,
    course_id: String,
    state: RwSignal<CourseEditorState>,
) -> impl IntoView {
    let navigate = use_navigate();
    let chapter_id = chapter.id.clone();

    let expanded = {
        let id = chapter_id.clone();
        move || state.with(|s| s.is_expanded(&id))
    };
    let editing = {
        let id = chapter_id.clone();
        move || {
            state.with(|s| s.chapter_edit.as_ref().is_some_and(|e| e.chapter_id == id))
        }
    };

    let on_toggle = {
        let id = chapter_id.clone();
        move |_| state.update(|s| s.toggle_chapter(&id))
    };
    let on_rename = {
        let id = chapter_id.clone();
        move |_| state.update(|s| s.begin_chapter_edit(&id))
    };
    let on_delete = {
        let id = chapter_id.clone();
        move |_| state.update(|s| s.delete_chapter(&id))
    };
    let on_add_lesson = {
        let id = chapter_id.clone();
        move |_| {
            state.update(|s| {
                s.add_lesson(&id);
            });
        }
    };

    let toggle_icon = {
        let expanded = expanded.clone();
        move || if expanded() { "\u{25BE}" } else { "\u{25B8}" }
    };

    let title = chapter.title.clone();
    let header = {
        let editing = editing.clone();
        move || {
            if editing() {
                view! {
                    <input
                        class="chapter-card__rename"
                        type="text"
                        prop:value=move || {
                            state.with(|s| s.chapter_edit.as_ref().map(|e| e.buffer.clone()))
                                .unwrap_or_default()
                        }
                        on:input=move |ev| {
                            state.update(|s| s.set_chapter_edit_buffer(event_target_value(&ev)))
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                state.update(CourseEditorState::commit_chapter_edit);
                            } else if ev.key() == "Escape" {
                                state.update(CourseEditorState::cancel_chapter_edit);
                            }
                        }
                    />
                }
                .into_any()
            } else {
                view! { <span class="chapter-card__title">{title.clone()}</span> }.into_any()
            }
        }
    };

    // Lesson rows render only while the chapter is expanded. Clicking the
    // row or its edit button routes to the same lesson editor.
    let lessons_section = {
        let expanded = expanded.clone();
        let lessons = chapter.lessons.clone();
        let course_id = course_id.clone();
        let navigate = navigate.clone();
        move || {
            if !expanded() {
                return None;
            }
            let rows = if lessons.is_empty() {
                view! { <p class="chapter-card__empty">"No lessons yet"</p> }.into_any()
            } else {
                lessons
                    .iter()
                    .map(|lesson| {
                        let url = format!("/lesson/{}?courseId={}", lesson.id, course_id);
                        let row_nav = {
                            let navigate = navigate.clone();
                            let url = url.clone();
                            move |_| navigate(&url, NavigateOptions::default())
                        };
                        let edit_nav = {
                            let navigate = navigate.clone();
                            move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                navigate(&url, NavigateOptions::default());
                            }
                        };
                        view! {
                            <div class="lesson-row" on:click=row_nav>
                                <span class="lesson-row__title">{lesson.title.clone()}</span>
                                <button class="btn lesson-row__edit" on:click=edit_nav>
                                    "Edit"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            };
            Some(view! { <div class="chapter-card__lessons">{rows}</div> })
        }
    };

    view! {
        <div class="chapter-card">
            <div class="chapter-card__header">
                <button class="chapter-card__toggle" on:click=on_toggle>
                    {toggle_icon}
                </button>
                {header}
                <span class="chapter-card__progress">
                    {format!("{}/{} lessons", chapter.completed_lessons, chapter.total_lessons)}
                </span>
                <div class="chapter-card__actions">
                    <button class="btn" on:click=on_rename>
                        "Rename"
                    </button>
                    <button class="btn" on:click=on_add_lesson>
                        "+ Lesson"
                    </button>
                    <button class="btn btn--danger" on:click=on_delete>
                        "Delete"
                    </button>
                </div>
            </div>

            {lessons_section}
        </div>
    }
}
