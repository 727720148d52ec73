//! Read-only renderer for table-typed content items.
//!
//! ERROR HANDLING
//! ==============
//! Malformed input never propagates past this component: a non-string
//! payload, unparseable JSON, or a structure without `headers`/`rows` arrays
//! all render as an inline message instead. Ragged rows render ragged.

use leptos::prelude::*;

use crate::net::types::{ContentItem, TableDocument};

/// Render a content item's `text` as an HTML table, or an inline error.
#[component]
pub fn TableViewer(item: ContentItem) -> impl IntoView {
    match TableDocument::from_item_text(&item.text) {
        Err(err) => view! { <p class="table-viewer__error">{err.to_string()}</p> }.into_any(),
        Ok(doc) => view! {
            <table class="table-viewer">
                <thead>
                    <tr>
                        {doc.headers
                            .iter()
                            .map(|header| view! { <th class="table-viewer__header">{header.clone()}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {doc.rows
                        .iter()
                        .enumerate()
                        .map(|(index, row)| {
                            let class = if index % 2 == 0 {
                                "table-viewer__row table-viewer__row--even"
                            } else {
                                "table-viewer__row table-viewer__row--odd"
                            };
                            view! {
                                <tr class=class>
                                    {row
                                        .iter()
                                        .map(|cell| view! { <td class="table-viewer__cell">{cell.clone()}</td> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
