use leptos::prelude::*;

/// Lifecycle of a user-triggered server run.
///
/// One run at a time: the trigger control is disabled while `Running`,
/// so overlapping requests against the same display elements cannot
/// happen. `Succeeded`/`Failed` keep the banner visible until the next
/// trigger returns the machine to `Running`.
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    Idle,
    Running { headline: String, detail: String },
    Succeeded { headline: String, detail: String },
    Failed { headline: String, detail: String },
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running { .. })
    }
}

/// Status banner driven by the run state machine: one info/success/
/// danger block instead of per-element spinner and color mutations.
#[component]
pub fn RunStatusBanner(#[prop(into)] state: Signal<RunState>) -> impl IntoView {
    move || match state.get() {
        RunState::Idle => view! { <></> }.into_any(),
        RunState::Running { headline, detail } => view! {
            <div class="alert alert-info" style="padding: 12px 16px; background: #cfe2ff; border: 1px solid #b6d4fe; border-radius: 6px; margin-bottom: 12px;">
                <span class="spinner" style="margin-right: 8px;">"⏳"</span>
                <strong>{headline}</strong>
                <div style="font-size: 0.875rem; margin-top: 4px;">{detail}</div>
            </div>
        }
        .into_any(),
        RunState::Succeeded { headline, detail } => view! {
            <div class="alert alert-success" style="padding: 12px 16px; background: #d1e7dd; border: 1px solid #badbcc; border-radius: 6px; margin-bottom: 12px;">
                <span style="color: #198754; margin-right: 8px;">"✓"</span>
                <strong>{headline}</strong>
                <div style="font-size: 0.875rem; margin-top: 4px;">{detail}</div>
            </div>
        }
        .into_any(),
        RunState::Failed { headline, detail } => view! {
            <div class="alert alert-danger" style="padding: 12px 16px; background: #f8d7da; border: 1px solid #f5c2c7; border-radius: 6px; margin-bottom: 12px;">
                <span style="color: #dc3545; margin-right: 8px;">"✗"</span>
                <strong>{headline}</strong>
                <div style="font-size: 0.875rem; margin-top: 4px;">{detail}</div>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_running_blocks_triggers() {
        assert!(!RunState::Idle.is_running());
        assert!(RunState::Running {
            headline: String::new(),
            detail: String::new()
        }
        .is_running());
        assert!(!RunState::Succeeded {
            headline: String::new(),
            detail: String::new()
        }
        .is_running());
        assert!(!RunState::Failed {
            headline: String::new(),
            detail: String::new()
        }
        .is_running());
    }
}
