//! Editable vocabulary table producing table-typed content items.

use leptos::prelude::*;

use crate::net::types::ContentItem;
use crate::state::table::{TABLE_HEADERS, TableEditorState};
use crate::util::browser;

/// Table input editor. Submitting filters out blank rows, serializes the
/// remainder into the table wire format, and hands the caller one content
/// item; an all-blank table is refused with a blocking alert.
#[component]
pub fn TableEditor(
    #[prop(into)] on_add_content: Callback<ContentItem>,
    #[prop(default = 2)] initial_column_count: usize,
) -> impl IntoView {
    let state = RwSignal::new(TableEditorState::new(initial_column_count));

    // Rows re-render only when the row set changes; cell inputs are
    // uncontrolled so typing does not rebuild them and steal focus.
    let row_ids = Memo::new(move |_| {
        state.with(|s| s.rows.iter().map(|row| row.id.clone()).collect::<Vec<_>>())
    });

    let on_submit = move |_| match state.with(TableEditorState::build_content) {
        None => browser::alert("Add at least one filled row before saving the table."),
        Some(item) => {
            on_add_content.run(item);
            state.update(TableEditorState::reset);
        }
    };

    view! {
        <div class="table-editor">
            <div class="table-editor__headers">
                {TABLE_HEADERS
                    .iter()
                    .map(|header| view! { <span class="table-editor__header">{*header}</span> })
                    .collect::<Vec<_>>()}
            </div>

            {move || {
                let ids = row_ids.get();
                let single_row = ids.len() == 1;
                ids.into_iter()
                    .map(|row_id| {
                        let cells = state.with_untracked(|s| {
                            s.rows
                                .iter()
                                .find(|row| row.id == row_id)
                                .map(|row| row.columns.clone())
                                .unwrap_or_default()
                        });
                        let inputs = cells
                            .into_iter()
                            .enumerate()
                            .map(|(column, cell)| {
                                let row_id = row_id.clone();
                                view! {
                                    <input
                                        class="table-editor__cell"
                                        type="text"
                                        value=cell
                                        on:input=move |ev| {
                                            state
                                                .update(|s| {
                                                    s.set_cell(&row_id, column, event_target_value(&ev))
                                                });
                                        }
                                    />
                                }
                            })
                            .collect::<Vec<_>>();

                        view! {
                            <div class="table-editor__row">
                                {inputs}
                                <button
                                    class="btn btn--danger table-editor__remove"
                                    title="Remove row"
                                    disabled=single_row
                                    on:click=move |_| state.update(|s| s.remove_row(&row_id))
                                >
                                    "\u{00D7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}

            <div class="table-editor__actions">
                <button class="btn" on:click=move |_| state.update(TableEditorState::add_row)>
                    "+ Add row"
                </button>
                <button class="btn btn--primary" on:click=on_submit>
                    "Save table"
                </button>
            </div>
        </div>
    }
}
