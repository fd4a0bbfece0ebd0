use leptos::prelude::*;

/// PagerControls component - prev/next paging over a filtered list
///
/// Pages are 1-indexed; the label shows the visible slice as
/// `<start>-<end>` of the filtered count.
#[component]
pub fn PagerControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Number of items after filtering
    #[prop(into)]
    filtered_count: Signal<usize>,

    /// Page size (fixed by the caller)
    page_size: usize,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let max_page = move || filtered_count.get().div_ceil(page_size).max(1);

    let range_label = move || {
        let count = filtered_count.get();
        if count == 0 {
            return "0-0".to_string();
        }
        let start = (current_page.get() - 1) * page_size;
        let end = (start + page_size).min(count);
        format!("{}-{}", start + 1, end)
    };

    view! {
        <div class="pager-controls" style="display: flex; align-items: center; gap: 8px;">
            <button
                class="pager-btn"
                style="padding: 6px 12px; border: 1px solid #ced4da; border-radius: 4px; background: white; cursor: pointer; font-size: 0.875rem;"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 1
                title="Halaman sebelumnya"
            >
                "‹ Prev"
            </button>
            <span class="pager-info" style="font-size: 0.875rem; color: #495057;">
                {range_label}
                {move || format!(" dari {}", filtered_count.get())}
            </span>
            <button
                class="pager-btn"
                style="padding: 6px 12px; border: 1px solid #ced4da; border-radius: 4px; background: white; cursor: pointer; font-size: 0.875rem;"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < max_page() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= max_page()
                title="Halaman berikutnya"
            >
                "Next ›"
            </button>
        </div>
    }
}
