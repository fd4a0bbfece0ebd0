use super::api;
use super::iterations_view::KmedoidsIterationCards;
use super::results_view::{FinalResults, RankingSource, TierAnalysisSection};
use crate::shared::components::alert::{Alert, AlertBox};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::number_format::{
    format_distance_opt, format_metric, format_metric_opt,
};
use crate::shared::download::confirm;
use crate::shared::run_state::{RunState, RunStatusBanner};
use contracts::clustering::{ClusteringAnalysis, KmedoidsIteration, MedoidPoint};
use contracts::usecases::u200_run_clustering::RunClusteringRequest;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn KmedoidsPage() -> impl IntoView {
    let (k_value, set_k_value) = signal("3".to_string());
    let (run_state, set_run_state) = signal(RunState::Idle);
    let (cost, set_cost) = signal(None::<f64>);
    let (dbi, set_dbi) = signal(None::<f64>);
    let (n_iter, set_n_iter) = signal(None::<(u32, u32)>);
    let (analysis, set_analysis) = signal(None::<ClusteringAnalysis>);
    let (iterations, set_iterations) = signal(Vec::<KmedoidsIteration>::new());
    // Converged medoids, passed straight into the render; the tier
    // ranking never reads them from anywhere else.
    let (final_medoids, set_final_medoids) = signal(Vec::<MedoidPoint>::new());
    let alert = RwSignal::new(None::<Alert>);

    let load_iterations = move |fallback_analysis: Option<ClusteringAnalysis>,
                                fallback_medoids: Option<Vec<MedoidPoint>>| {
        spawn_local(async move {
            match api::get_kmedoids_iterations().await {
                Ok(resp) if resp.is_success() => {
                    let medoids = resp
                        .final_medoids()
                        .map(|m| m.to_vec())
                        .or(fallback_medoids)
                        .unwrap_or_default();
                    set_final_medoids.set(medoids);
                    set_iterations.set(resp.iterations);
                    if resp.analysis.is_some() {
                        set_analysis.set(resp.analysis);
                    } else {
                        set_analysis.set(fallback_analysis);
                    }
                }
                Ok(_) => {
                    set_final_medoids.set(fallback_medoids.unwrap_or_default());
                    set_analysis.set(fallback_analysis);
                }
                Err(e) => {
                    log!("Error loading iterations: {}", e);
                    set_final_medoids.set(fallback_medoids.unwrap_or_default());
                    set_analysis.set(fallback_analysis);
                }
            }
        });
    };

    // Restore the persisted run on page load
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_kmedoids().await {
                Ok(resp) => {
                    if resp.cost.is_some() {
                        set_cost.set(resp.cost);
                        set_dbi.set(resp.davies_bouldin);
                        if let (Some(n), Some(max)) = (resp.n_iter, resp.max_iterations) {
                            set_n_iter.set(Some((n, max)));
                        }
                        load_iterations(resp.analysis, resp.medoids);
                    }
                }
                Err(e) => log!("Error loading results: {}", e),
            }
        });
    });

    let on_run = move |_| {
        if run_state.get().is_running() {
            return;
        }
        let Ok(k) = k_value.get().trim().parse::<u8>() else {
            alert.set(Some(Alert::error("Nilai K tidak valid")));
            return;
        };
        alert.set(None);
        set_run_state.set(RunState::Running {
            headline: "Running KMedoids Clustering...".to_string(),
            detail: format!("Processing {k} clusters, please wait..."),
        });

        spawn_local(async move {
            match api::run_kmedoids(&RunClusteringRequest { k }).await {
                Ok(resp) if resp.is_success() => {
                    set_cost.set(resp.cost);
                    set_dbi.set(resp.davies_bouldin);
                    if let (Some(n), Some(max)) = (resp.n_iter, resp.max_iterations) {
                        set_n_iter.set(Some((n, max)));
                    }
                    load_iterations(resp.analysis, resp.medoids);
                    set_run_state.set(RunState::Succeeded {
                        headline: "Clustering Berhasil!".to_string(),
                        detail: format!(
                            "Hasil disimpan dengan Cost: {}",
                            format_metric(resp.cost.unwrap_or(0.0))
                        ),
                    });
                    alert.set(Some(Alert::success(format!(
                        "Clustering completed with K={k} clusters."
                    ))));
                }
                Ok(resp) => {
                    let message = resp
                        .error
                        .unwrap_or_else(|| "Unknown error occurred".to_string());
                    set_run_state.set(RunState::Failed {
                        headline: "Clustering Gagal!".to_string(),
                        detail: message.clone(),
                    });
                    alert.set(Some(Alert::error(message)));
                }
                Err(e) => {
                    set_run_state.set(RunState::Failed {
                        headline: "Clustering Gagal!".to_string(),
                        detail: e.clone(),
                    });
                    alert.set(Some(Alert::error(e)));
                }
            }
        });
    };

    let on_reset = move |_| {
        if run_state.get().is_running() {
            return;
        }
        if !confirm("Apakah Anda yakin ingin mereset semua hasil clustering?") {
            return;
        }
        spawn_local(async move {
            match api::reset_results().await {
                Ok(resp) if resp.is_success() => {
                    set_cost.set(None);
                    set_dbi.set(None);
                    set_n_iter.set(None);
                    set_analysis.set(None);
                    set_iterations.set(Vec::new());
                    set_final_medoids.set(Vec::new());
                    set_run_state.set(RunState::Idle);
                    alert.set(Some(Alert::info(
                        "Reset Berhasil! Semua hasil clustering telah dihapus.",
                    )));
                }
                Ok(resp) => alert.set(Some(Alert::error(resp.error_text()))),
                Err(e) => alert.set(Some(Alert::error(format!("Error: {}", e)))),
            }
        });
    };

    view! {
        <div class="kmedoids-page">
            <h2 style="margin: 0 0 12px 0; font-size: 1.2rem; font-weight: 700; color: #2d3748;">"🎯 KMedoids Clustering"</h2>

            <div style="background: white; padding: 12px; border-radius: 8px; border: 1px solid #e9ecef; display: flex; align-items: center; gap: 12px; margin-bottom: 12px;">
                <label style="font-size: 0.875rem; font-weight: 500; color: #495057;">"Jumlah Cluster (K):"</label>
                <input
                    type="number"
                    min="2"
                    max="10"
                    prop:value=k_value
                    on:input=move |ev| set_k_value.set(event_target_value(&ev))
                    prop:disabled=move || run_state.get().is_running()
                    style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; width: 80px;"
                />
                <button
                    on:click=on_run
                    prop:disabled=move || run_state.get().is_running()
                    style="padding: 8px 18px; background: #198754; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                >
                    {move || if run_state.get().is_running() { "Processing..." } else { "▶️ Jalankan Clustering" }}
                </button>
                <button
                    on:click=on_reset
                    prop:disabled=move || run_state.get().is_running()
                    style="padding: 8px 18px; background: #6c757d; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                >
                    "Reset"
                </button>
                {move || n_iter.get().map(|(n, max)| view! {
                    <span style="font-size: 0.8rem; color: #6c757d; margin-left: auto;">
                        {format!("Konvergen pada iterasi {n} dari maksimum {max}")}
                    </span>
                })}
            </div>

            <AlertBox alert=alert />
            <RunStatusBanner state=run_state />

            {move || cost.get().is_some().then(|| view! {
                <div style="display: flex; gap: 12px; margin-bottom: 16px;">
                    <StatCard
                        label="Cost"
                        value=Signal::derive(move || format_metric_opt(cost.get()))
                        accent="#198754"
                    />
                    <StatCard
                        label="Davies-Bouldin Index"
                        value=Signal::derive(move || format_distance_opt(dbi.get()))
                        accent="#0d6efd"
                    />
                </div>
            })}

            {move || {
                let iters = iterations.get();
                (!iters.is_empty()).then(|| view! {
                    <div style="margin-bottom: 16px;">
                        <h3 style="font-size: 1rem; font-weight: 700; color: #2d3748; margin-bottom: 10px;">"Proses Iterasi"</h3>
                        <KmedoidsIterationCards iterations=iters.clone() />
                    </div>
                })
            }}

            // Final results: converged medoids rank the clusters; when
            // they are absent the range-count fallback applies.
            {move || analysis.get().map(|a| view! {
                <div style="margin-bottom: 16px;">
                    <h3 style="font-size: 1rem; font-weight: 700; color: #2d3748; margin-bottom: 10px;">"Hasil Akhir"</h3>
                    <FinalResults
                        analysis=a.clone()
                        ranking=RankingSource::FinalMedoids(final_medoids.get())
                    />
                    <div style="margin-top: 16px;">
                        <TierAnalysisSection analysis=a />
                    </div>
                </div>
            })}
        </div>
    }
}
