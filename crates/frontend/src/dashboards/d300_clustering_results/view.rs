use crate::shared::components::cluster_badge::ClusterBadge;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::number_format::{
    format_distance_opt, format_metric_opt, format_qty,
};
use crate::shared::download::{download_text_file, today};
use crate::usecases::u200_run_clustering::api;
use contracts::clustering::{
    aggregate_clusters, analysis_rows, rank_by_medoids, rank_by_range_counts, rank_by_totals,
    ClusteringAnalysis, MedoidPoint, Tier, TierAssignment,
};
use contracts::exports::report::{results_filename, results_text, ResultsSummary};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One row of the combined clustering table, annotated with its tier.
#[derive(Debug, Clone, PartialEq)]
struct ResultRow {
    kategori: String,
    range: String,
    total_terjual: f64,
    cluster: Option<u8>,
    tier: Option<Tier>,
}

fn build_rows(analysis: &ClusteringAnalysis, assignment: &TierAssignment) -> Vec<ResultRow> {
    analysis_rows(analysis)
        .into_iter()
        .map(|row| ResultRow {
            tier: row.cluster.and_then(|c| assignment.tier_of(c)),
            kategori: row.kategori,
            range: row.range,
            total_terjual: row.total_terjual,
            cluster: row.cluster,
        })
        .collect()
}

/// Rows matching the applied tier filter, renumbered from 1 so the row
/// number column stays live after every filter change.
fn visible_rows(rows: &[ResultRow], filter: Option<Tier>) -> Vec<(usize, ResultRow)> {
    rows.iter()
        .filter(|row| filter.is_none() || row.tier == filter)
        .cloned()
        .enumerate()
        .map(|(idx, row)| (idx + 1, row))
        .collect()
}

/// Per-tier row counts, in rank order.
fn tier_counts(rows: &[ResultRow]) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for row in rows {
        if let Some(tier) = row.tier {
            let rank = Tier::RANKED.iter().position(|&t| t == tier).unwrap_or(2);
            counts[rank] += 1;
        }
    }
    counts
}

fn tier_from_label(label: &str) -> Option<Tier> {
    Tier::RANKED.into_iter().find(|tier| tier.label() == label)
}

/// Canonical ranking for the dashboard read path: converged medoids
/// when the KMedoids run provides them, range-count fallback otherwise;
/// a KMeans-only result ranks by aggregated totals.
fn rank_for_dashboard(
    analysis: &ClusteringAnalysis,
    medoids: &[MedoidPoint],
    from_kmedoids: bool,
) -> Option<TierAssignment> {
    let aggregates = aggregate_clusters(analysis).ok()?;
    if !from_kmedoids {
        return Some(rank_by_totals(&aggregates));
    }
    if medoids.is_empty() {
        return Some(rank_by_range_counts(&aggregates));
    }
    rank_by_medoids(medoids).ok()
}

#[component]
pub fn ClusteringResultsPage() -> impl IntoView {
    let (summary, set_summary) = signal(ResultsSummary::default());
    let (rows, set_rows) = signal(Vec::<ResultRow>::new());
    let (loaded, set_loaded) = signal(false);

    // The dropdown edits `selected`; the table only follows on Apply.
    let (selected, set_selected) = signal("all".to_string());
    let (applied, set_applied) = signal(None::<Tier>);
    let (apply_feedback, set_apply_feedback) = signal(false);

    // Load both persisted runs on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let mut next_summary = ResultsSummary::default();

            let kmeans = api::get_kmeans().await;
            if let Ok(resp) = &kmeans {
                next_summary.kmeans_inertia = resp.inertia;
                next_summary.kmeans_dbi = resp.davies_bouldin;
            }

            match api::get_kmedoids().await {
                Ok(resp) => {
                    next_summary.kmedoids_cost = resp.cost;
                    next_summary.kmedoids_dbi = resp.davies_bouldin;

                    let medoids = match api::get_kmedoids_iterations().await {
                        Ok(iter_resp) if iter_resp.is_success() => iter_resp
                            .final_medoids()
                            .map(|m| m.to_vec())
                            .or(resp.medoids)
                            .unwrap_or_default(),
                        _ => resp.medoids.unwrap_or_default(),
                    };

                    if let Some(analysis) = &resp.analysis {
                        if let Some(assignment) = rank_for_dashboard(analysis, &medoids, true) {
                            set_rows.set(build_rows(analysis, &assignment));
                        }
                    } else if let Ok(kmeans_resp) = &kmeans {
                        // No KMedoids result persisted; fall back to the
                        // KMeans analysis for the table.
                        if let Some(analysis) = &kmeans_resp.analysis {
                            if let Some(assignment) = rank_for_dashboard(analysis, &[], false) {
                                set_rows.set(build_rows(analysis, &assignment));
                            }
                        }
                    }
                }
                Err(e) => log!("Error loading results: {}", e),
            }

            set_summary.set(next_summary);
            set_loaded.set(true);
        });
    });

    let on_apply = move |_| {
        set_applied.set(tier_from_label(&selected.get()));
        set_apply_feedback.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(1500).await;
            set_apply_feedback.set(false);
        });
    };

    let on_export = move |_| {
        let text = results_text(&summary.get());
        if let Err(e) = download_text_file(
            &results_filename(today()),
            "text/plain;charset=utf-8;",
            &text,
        ) {
            log!("Failed to export: {}", e);
        }
    };

    let on_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <div class="results-page">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px;">
                <h2 style="margin: 0; font-size: 1.2rem; font-weight: 700; color: #2d3748;">"🏁 Hasil Clustering"</h2>
                <div style="display: flex; gap: 8px;">
                    <button
                        on:click=on_export
                        style="height: 32px; padding: 0 16px; background: #217346; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                    >
                        "📄 Export"
                    </button>
                    <button
                        on:click=on_print
                        style="height: 32px; padding: 0 16px; background: #6c757d; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                    >
                        "🖨 Print"
                    </button>
                </div>
            </div>

            // Metric tiles for both algorithms
            <div style="display: flex; gap: 12px; margin-bottom: 16px; flex-wrap: wrap;">
                <StatCard
                    label="KMeans Inertia"
                    value=Signal::derive(move || format_metric_opt(summary.get().kmeans_inertia))
                    accent="#0d6efd"
                />
                <StatCard
                    label="KMeans DBI"
                    value=Signal::derive(move || format_distance_opt(summary.get().kmeans_dbi))
                    accent="#0d6efd"
                />
                <StatCard
                    label="KMedoids Cost"
                    value=Signal::derive(move || format_metric_opt(summary.get().kmedoids_cost))
                    accent="#198754"
                />
                <StatCard
                    label="KMedoids DBI"
                    value=Signal::derive(move || format_distance_opt(summary.get().kmedoids_dbi))
                    accent="#198754"
                />
            </div>

            // Tier counts
            {move || {
                let counts = tier_counts(&rows.get());
                view! {
                    <div style="display: flex; gap: 12px; margin-bottom: 12px;">
                        {Tier::RANKED.iter().zip(counts).map(|(tier, count)| view! {
                            <div style=format!("padding: 6px 14px; border-radius: 16px; font-size: 0.8rem; font-weight: 600; color: white; background: {};", tier.color())>
                                {format!("{}: {}", tier.label(), count)}
                            </div>
                        }).collect_view()}
                    </div>
                }
            }}

            // Tier filter
            <div style="background: white; padding: 10px 12px; border-radius: 8px; border: 1px solid #e9ecef; display: flex; align-items: center; gap: 12px; margin-bottom: 12px;">
                <label style="font-size: 0.875rem; font-weight: 500; color: #495057;">"Filter Tier:"</label>
                <select
                    prop:value=selected
                    on:change=move |ev| set_selected.set(event_target_value(&ev))
                    style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; min-width: 160px; background: #fff;"
                >
                    <option value="all">"Semua"</option>
                    {Tier::RANKED.iter().map(|tier| view! {
                        <option value=tier.label()>{tier.label()}</option>
                    }).collect_view()}
                </select>
                <button
                    on:click=on_apply
                    style=move || format!(
                        "padding: 6px 16px; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500; background: {};",
                        if apply_feedback.get() { "#198754" } else { "#0d6efd" },
                    )
                >
                    {move || if apply_feedback.get() { "✓ Diterapkan!" } else { "Terapkan" }}
                </button>
            </div>

            // Clustering table with live row numbers
            {move || {
                let visible = visible_rows(&rows.get(), applied.get());
                if !loaded.get() {
                    view! { <div>"Loading..."</div> }.into_any()
                } else if visible.is_empty() {
                    view! {
                        <div id="emptyState" style="background: white; border: 1px solid #e9ecef; border-radius: 8px; padding: 28px; text-align: center; color: #6c757d;">
                            "Tidak ada data untuk filter ini"
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div style="overflow-y: auto; border: 1px solid #e0e0e0; border-radius: 6px;">
                            <table class="data-table" style="width: 100%; border-collapse: collapse; margin: 0; font-size: 0.85em; background: white;">
                                <thead style="position: sticky; top: 0; z-index: 10; background: #f8f9fa;">
                                    <tr>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"#"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"Kategori"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"Size"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: right; font-weight: 600;">"Jumlah Terjual"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: center; font-weight: 600;">"Cluster"</th>
                                        <th style="border-bottom: 2px solid #dee2e6; padding: 8px 10px; text-align: left; font-weight: 600;">"Tier"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {visible.into_iter().map(|(number, row)| view! {
                                        <tr class="cluster-row" style="border-bottom: 1px solid #f1f3f5;">
                                            <td style="padding: 6px 10px;">{number}</td>
                                            <td style="padding: 6px 10px;">{row.kategori.clone()}</td>
                                            <td style="padding: 6px 10px;">{row.range.clone()}</td>
                                            <td style="padding: 6px 10px; text-align: right;">{format_qty(row.total_terjual)}</td>
                                            <td style="padding: 6px 10px; text-align: center;">
                                                <ClusterBadge cluster=row.cluster />
                                            </td>
                                            <td style="padding: 6px 10px;">
                                                {match row.tier {
                                                    Some(tier) => view! {
                                                        <span style=format!("font-weight: 600; color: {};", tier.color())>
                                                            {tier.label()}
                                                        </span>
                                                    }.into_any(),
                                                    None => view! { <span style="color: #6c757d;">"-"</span> }.into_any(),
                                                }}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::clustering::RangeRecord;

    fn analysis() -> ClusteringAnalysis {
        let mut analysis = ClusteringAnalysis::default();
        for (range, total, cluster) in [
            ("33-36", 900.0, Some(0)),
            ("37-40", 500.0, Some(1)),
            ("41-44", 100.0, Some(2)),
            ("45-48", 50.0, None),
        ] {
            analysis.standard.insert(
                range.to_string(),
                RangeRecord {
                    total_terjual: total,
                    dominant_cluster: cluster,
                    items: None,
                    tier: None,
                },
            );
        }
        analysis
    }

    #[test]
    fn test_build_rows_annotates_tiers() {
        let analysis = analysis();
        let assignment = rank_for_dashboard(&analysis, &[], false).unwrap();
        let rows = build_rows(&analysis, &assignment);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].tier, Some(Tier::Terlaris));
        assert_eq!(rows[1].tier, Some(Tier::Sedang));
        assert_eq!(rows[2].tier, Some(Tier::KurangLaris));
        // Unassigned range keeps the `-` badge and no tier.
        assert_eq!(rows[3].tier, None);
        assert_eq!(rows[3].cluster, None);
    }

    #[test]
    fn test_visible_rows_renumber_after_filter() {
        let analysis = analysis();
        let assignment = rank_for_dashboard(&analysis, &[], false).unwrap();
        let rows = build_rows(&analysis, &assignment);

        let all = visible_rows(&rows, None);
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].0, 4);

        let only_sedang = visible_rows(&rows, Some(Tier::Sedang));
        assert_eq!(only_sedang.len(), 1);
        // Renumbered from 1, not keeping the original position.
        assert_eq!(only_sedang[0].0, 1);
        assert_eq!(only_sedang[0].1.range, "37-40");
    }

    #[test]
    fn test_tier_counts_ignore_unassigned() {
        let analysis = analysis();
        let assignment = rank_for_dashboard(&analysis, &[], false).unwrap();
        let rows = build_rows(&analysis, &assignment);
        assert_eq!(tier_counts(&rows), [1, 1, 1]);
    }

    #[test]
    fn test_dashboard_ranking_uses_medoids_when_present() {
        let analysis = analysis();
        let medoids = vec![
            MedoidPoint { cluster_id: 0, jumlah_terjual: 1.0, total_harga: None },
            MedoidPoint { cluster_id: 1, jumlah_terjual: 2.0, total_harga: None },
            MedoidPoint { cluster_id: 2, jumlah_terjual: 3.0, total_harga: None },
        ];
        let assignment = rank_for_dashboard(&analysis, &medoids, true).unwrap();
        // Medoid volumes invert the totals-based order.
        assert_eq!(assignment.tier_of(2), Some(Tier::Terlaris));
        assert_eq!(assignment.tier_of(0), Some(Tier::KurangLaris));
    }

    #[test]
    fn test_tier_from_label() {
        assert_eq!(tier_from_label("Terlaris"), Some(Tier::Terlaris));
        assert_eq!(tier_from_label("Kurang Laris"), Some(Tier::KurangLaris));
        assert_eq!(tier_from_label("all"), None);
    }
}
