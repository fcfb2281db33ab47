//! Pulsing placeholders shown while a page's initial fetch is in flight.

use leptos::prelude::*;

/// Placeholder table rows for the users table.
#[component]
pub fn SkeletonRows(rows: usize, columns: usize) -> impl IntoView {
    (0..rows)
        .map(|_| {
            view! {
                <tr class="skeleton-row">
                    {(0..columns)
                        .map(|_| view! { <td><div class="skeleton skeleton--line"></div></td> })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view()
}

/// Placeholder label + input pairs for a form.
#[component]
pub fn SkeletonForm(fields: usize) -> impl IntoView {
    view! {
        <div class="skeleton-form">
            {(0..fields)
                .map(|_| {
                    view! {
                        <div class="skeleton-form__field">
                            <div class="skeleton skeleton--label"></div>
                            <div class="skeleton skeleton--input"></div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="skeleton skeleton--button"></div>
        </div>
    }
}
