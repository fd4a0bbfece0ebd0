use leptos::prelude::*;

/// Background color of a cluster badge; unassigned (`-`) renders gray.
pub fn badge_color(cluster: Option<u8>) -> &'static str {
    match cluster {
        Some(0) => "#0d6efd",
        Some(1) => "#198754",
        Some(2) => "#fd7e14",
        _ => "#6c757d",
    }
}

/// Badge text: `C<id>` or `-`.
pub fn badge_text(cluster: Option<u8>) -> String {
    match cluster {
        Some(id) => format!("C{id}"),
        None => "-".to_string(),
    }
}

/// `C0`/`C1`/`C2` pill used in every results table.
#[component]
pub fn ClusterBadge(cluster: Option<u8>) -> impl IntoView {
    view! {
        <span
            class="cluster-badge"
            style=format!(
                "display: inline-block; min-width: 2.2em; text-align: center; padding: 0.3rem 0.5rem; border-radius: 4px; font-size: 0.8rem; font-weight: 600; color: white; background: {};",
                badge_color(cluster)
            )
        >
            {badge_text(cluster)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(Some(0)), "C0");
        assert_eq!(badge_text(Some(2)), "C2");
        assert_eq!(badge_text(None), "-");
    }

    #[test]
    fn test_unassigned_is_gray() {
        assert_eq!(badge_color(None), "#6c757d");
    }
}
