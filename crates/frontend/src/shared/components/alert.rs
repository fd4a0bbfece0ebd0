use leptos::prelude::*;

/// Kind of a dismissible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

/// A dismissible notice shown after a server action.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }
}

/// Dismissible alert banner. Rendered when the signal holds an alert;
/// the close button clears the signal.
#[component]
pub fn AlertBox(alert: RwSignal<Option<Alert>>) -> impl IntoView {
    move || {
        alert.get().map(|a| {
            let (bg, border, color, icon) = match a.kind {
                AlertKind::Success => ("#d1e7dd", "#badbcc", "#0f5132", "✓"),
                AlertKind::Error => ("#f8d7da", "#f5c2c7", "#842029", "✗"),
                AlertKind::Info => ("#cfe2ff", "#b6d4fe", "#084298", "ℹ"),
            };
            view! {
                <div
                    class="alert"
                    style=format!(
                        "display: flex; align-items: center; justify-content: space-between; padding: 10px 14px; background: {bg}; border: 1px solid {border}; border-radius: 6px; color: {color}; margin-bottom: 12px;"
                    )
                >
                    <span><strong>{icon}</strong>" "{a.message}</span>
                    <button
                        on:click=move |_| alert.set(None)
                        style="background: none; border: none; cursor: pointer; font-size: 1rem; color: inherit;"
                        title="Tutup"
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
