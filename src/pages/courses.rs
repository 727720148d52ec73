//! Courses page listing course summaries with create and open actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::CourseSummary;

/// Courses page: shows the course list and a create-course button.
#[component]
pub fn CoursesPage() -> impl IntoView {
    // Course list resource; fetches on mount.
    let courses = LocalResource::new(|| crate::net::api::fetch_courses());

    // Create-course dialog state.
    let show_create = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());

    let on_create = move |_| {
        show_create.set(true);
        new_title.set(String::new());
    };

    let on_cancel = Callback::new(move |_| show_create.set(false));

    view! {
        <div class="courses-page">
            <header class="courses-page__header">
                <h1>"Courses"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Course"
                </button>
            </header>

            <div class="courses-page__grid">
                <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                    {move || {
                        courses
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="courses-page__empty">
                                            "No courses yet. Create one to get started."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="courses-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|course| view! { <CourseCard course=course/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <Show when=move || show_create.get()>
                <CreateCourseDialog title=new_title on_cancel=on_cancel courses=courses/>
            </Show>
        </div>
    }
}

/// A clickable card representing one course.
#[component]
fn CourseCard(course: CourseSummary) -> impl IntoView {
    let href = format!("/course/{}", course.id);

    view! {
        <a class="course-card" href=href>
            <span class="course-card__title">{course.title}</span>
            <span class="course-card__level">{course.level}</span>
        </a>
    }
}

/// Modal dialog for creating a new course.
#[component]
fn CreateCourseDialog(
    title: RwSignal<String>,
    on_cancel: Callback<()>,
    courses: LocalResource<Vec<CourseSummary>>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        let course_title = title.get();
        if course_title.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let course_title = course_title.trim().to_owned();
            let navigate = navigate.clone();
            let courses = courses.clone();
            leptos::task::spawn_local(async move {
                if let Some(course) = crate::net::api::create_course(&course_title).await {
                    courses.refetch();
                    navigate(&format!("/course/{}", course.id), NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = course_title;
            let _ = &courses;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Course"</h2>
                <label class="dialog__label">
                    "Course Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            title.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
