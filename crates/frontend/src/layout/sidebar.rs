use super::Page;
use leptos::prelude::*;

#[component]
pub fn Sidebar(active_page: RwSignal<Page>) -> impl IntoView {
    view! {
        <div class="sidebar" style="width: 220px; background: linear-gradient(180deg, #2d3748 0%, #1a202c 100%); color: white; padding: 16px 0; flex-shrink: 0;">
            <div style="padding: 0 16px 16px 16px; border-bottom: 1px solid rgba(255,255,255,0.15);">
                <div style="font-size: 1.1rem; font-weight: 700;">"Arwana Sales"</div>
                <div style="font-size: 0.75rem; color: #a0aec0;">"Clustering Dashboard"</div>
            </div>
            <nav style="margin-top: 12px;">
                {Page::ALL.iter().map(|&page| {
                    let is_active = move || active_page.get() == page;
                    view! {
                        <button
                            on:click=move |_| active_page.set(page)
                            style=move || format!(
                                "display: flex; align-items: center; gap: 10px; width: 100%; text-align: left; padding: 10px 16px; border: none; cursor: pointer; font-size: 0.875rem; color: {}; background: {};",
                                if is_active() { "white" } else { "#cbd5e0" },
                                if is_active() { "rgba(255,255,255,0.12)" } else { "transparent" },
                            )
                        >
                            <span>{page.icon()}</span>
                            <span>{page.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
