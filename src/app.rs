//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    course_editor::CourseEditorPage, courses::CoursesPage, lesson_editor::LessonEditorPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component setting up client-side routing.
///
/// Editor state is page-local, so no shared contexts are provided here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/courseforge.css"/>
        <Title text="CourseForge"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CoursesPage/>
                <Route path=(StaticSegment("course"), ParamSegment("id")) view=CourseEditorPage/>
                <Route path=(StaticSegment("lesson"), ParamSegment("id")) view=LessonEditorPage/>
            </Routes>
        </Router>
    }
}
