use leptos::prelude::*;

/// Numbered pagination: previous/next arrows plus one button per page.
///
/// Pages are 0-indexed internally and rendered 1-based. Out-of-range
/// requests are already a no-op in the list model; the arrows also
/// disable themselves at the edges.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed, clamped by the model).
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (0 when the filtered set is empty).
    #[prop(into)]
    page_count: Signal<usize>,

    /// Callback when a page is picked.
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-container">
            <button
                class="pagination-arrow"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
            >
                "\u{2190}"
            </button>
            <For
                each=move || 0..page_count.get()
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class="pagination-button"
                            class:active=move || current_page.get() == page
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page + 1}
                        </button>
                    }
                }
            />
            <button
                class="pagination-arrow"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < page_count.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= page_count.get()
            >
                "\u{2192}"
            </button>
        </div>
    }
}
