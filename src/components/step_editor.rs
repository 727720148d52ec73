//! Type-dispatching editor for a single lesson step.
//!
//! `LessonInformation` gets a bespoke form; every other step type renders an
//! explicit "not yet supported" surface with a read-only payload preview.
//! The one bulk action, "assign template", overwrites the entire payload
//! with the fixed template for the step's type, discarding partial edits.

use leptos::prelude::*;

use crate::components::field_input::{TextAreaField, TextField};
use crate::net::types::{LessonInformation, Step, StepData};

/// Editor for one step. Emits full replacement steps through `on_update`;
/// `on_cancel` discards in-progress edits.
#[component]
pub fn StepEditor(
    step: Step,
    #[prop(into)] on_update: Callback<Step>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let step_type = step.step_type();
    let step_id = step.id.clone();

    let assign_template = Callback::new(move |_: ()| {
        on_update.run(Step {
            id: step_id.clone(),
            data: StepData::template(step_type),
        });
    });

    let body = match step.data.clone() {
        StepData::LessonInformation(info) => view! {
            <LessonInformationForm
                step_id=step.id.clone()
                info=info
                on_update=on_update
                on_cancel=on_cancel
            />
        }
        .into_any(),
        data @ (StepData::ListenVocabulary(_)
        | StepData::FillInTheBlanks(_)
        | StepData::WordOrdering(_)
        | StepData::LanguageQuestion(_)
        | StepData::LanguagePhrases(_)
        | StepData::MatchingPairs(_)) => view! {
            <UnsupportedStep data=data on_cancel=on_cancel/>
        }
        .into_any(),
    };

    view! {
        <div class="step-editor">
            <header class="step-editor__header">
                <h3 class="step-editor__title">{step_type.label()}</h3>
                <button
                    class="btn step-editor__assign"
                    title="Replace the payload with this step type's template"
                    on:click=move |_| assign_template.run(())
                >
                    "Assign template"
                </button>
            </header>
            {body}
        </div>
    }
}

/// Bespoke form for informational steps.
#[component]
fn LessonInformationForm(
    step_id: String,
    info: LessonInformation,
    on_update: Callback<Step>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(info.title);
    let main_text = RwSignal::new(info.main_text);
    let secondary_text = RwSignal::new(info.secondary_text);

    let save = move |_| {
        on_update.run(Step {
            id: step_id.clone(),
            data: StepData::LessonInformation(LessonInformation {
                title: title.get(),
                main_text: main_text.get(),
                secondary_text: secondary_text.get(),
            }),
        });
    };

    view! {
        <div class="step-editor__form">
            <TextField
                label="Title"
                value=title
                on_input=Callback::new(move |v| title.set(v))
            />
            <TextAreaField
                label="Main text"
                value=main_text
                on_input=Callback::new(move |v| main_text.set(v))
            />
            <TextAreaField
                label="Secondary text"
                value=secondary_text
                on_input=Callback::new(move |v| secondary_text.set(v))
                rows=2
            />
            <div class="step-editor__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=save>
                    "Save step"
                </button>
            </div>
        </div>
    }
}

/// Explicit fallback for step types without a bespoke editor yet.
#[component]
fn UnsupportedStep(data: StepData, on_cancel: Callback<()>) -> impl IntoView {
    let preview = serde_json::to_string_pretty(&data)
        .unwrap_or_else(|_| "(payload unavailable)".to_owned());

    view! {
        <div class="step-editor__unsupported">
            <p class="step-editor__notice">
                "Editing this step type is not yet supported. Assign the template or edit the course data directly."
            </p>
            <pre class="step-editor__preview">{preview}</pre>
            <div class="step-editor__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
