use leptos::prelude::*;

/// Metric tile for dashboard headers (inertia, DBI, record counts).
/// `None` renders as `-`, matching the reset state of the dashboards.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Already-formatted value (None = not computed yet)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Accent color for the value
    #[prop(optional, into)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let accent = accent.unwrap_or("#2d3748");

    view! {
        <div class="stat-card" style="background: white; border: 1px solid #e9ecef; border-radius: 8px; padding: 14px 18px; min-width: 160px; box-shadow: 0 1px 3px rgba(0,0,0,0.06);">
            <div class="stat-card__label" style="font-size: 0.75rem; color: #6c757d; text-transform: uppercase; letter-spacing: 0.5px; font-weight: 600;">
                {label}
            </div>
            <div
                class="stat-card__value"
                style=format!("font-size: 1.5rem; font-weight: 700; font-family: 'Courier New', monospace; color: {accent}; margin-top: 4px;")
            >
                {move || value.get().unwrap_or_else(|| "-".to_string())}
            </div>
        </div>
    }
}
