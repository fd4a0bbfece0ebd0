use crate::shared::components::cluster_badge::{badge_color, ClusterBadge};
use crate::shared::components::table::number_format::{format_distance, format_metric, format_qty};
use contracts::clustering::{ClusterAssignment, KmeansIteration, KmedoidsIteration};
use leptos::prelude::*;

/// How many assignment rows an iteration card shows.
const ASSIGNMENT_PREVIEW: usize = 15;

/// Cluster id behind an `C<id>` label from the server.
fn assigned_cluster_id(label: &str) -> Option<u8> {
    label.trim_start_matches(['C', 'c']).parse().ok()
}

#[component]
fn DistanceTable(assignments: Vec<ClusterAssignment>, center_name: &'static str) -> impl IntoView {
    view! {
        <div class="distance-section" style="margin-top: 1.5rem;">
            <div style="font-size: 1rem; font-weight: 600; margin-bottom: 1rem; color: #333;">
                {format!("📏 Jarak Euclidean ke Setiap {center_name}")}
            </div>
            <div class="table-responsive">
                <table class="table" style="width: 100%; border-collapse: collapse; border: 1px solid #dee2e6; background: white; margin-bottom: 0;">
                    <thead style="background-color: #f8f9fa; border-bottom: 2px solid #dee2e6;">
                        <tr>
                            <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: left;">"Kategori"</th>
                            <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: left;">"Size"</th>
                            <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: right;">"Jumlah Terjual"</th>
                            <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: center;">"C0 Distance"</th>
                            <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: center;">"C1 Distance"</th>
                            <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: center;">"C2 Distance"</th>
                            <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: center;">"Assigned"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {assignments.iter().take(ASSIGNMENT_PREVIEW).enumerate().map(|(idx, assignment)| {
                            let cluster = assigned_cluster_id(&assignment.assigned_cluster);
                            view! {
                                <tr style=format!("background-color: {}; border-bottom: 1px solid #dee2e6;", if idx % 2 == 0 { "white" } else { "#f9f9f9" })>
                                    <td style="padding: 0.6rem;">{assignment.kategori.clone()}</td>
                                    <td style="padding: 0.6rem;">{assignment.size_range.clone()}</td>
                                    <td style="padding: 0.6rem; text-align: right; font-weight: 500;">{format_qty(assignment.jumlah_terjual)}</td>
                                    <td style="padding: 0.6rem; text-align: center; font-family: monospace; color: #666;">{format_distance(assignment.distance_to("C0"))}</td>
                                    <td style="padding: 0.6rem; text-align: center; font-family: monospace; color: #666;">{format_distance(assignment.distance_to("C1"))}</td>
                                    <td style="padding: 0.6rem; text-align: center; font-family: monospace; color: #666;">{format_distance(assignment.distance_to("C2"))}</td>
                                    <td style="padding: 0.6rem; text-align: center;">
                                        <ClusterBadge cluster=cluster />
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
            <p style="font-size: 0.8rem; color: #6c757d; margin-top: 0.75rem; margin-bottom: 0;">
                {format!("* Menampilkan {ASSIGNMENT_PREVIEW} data pertama")}
            </p>
        </div>
    }
}

#[component]
fn ConvergenceBadge(center_name: &'static str) -> impl IntoView {
    view! {
        <div class="convergence-badge" style="margin-top: 1rem; padding: 10px 14px; background: #d1e7dd; border: 1px solid #badbcc; border-radius: 6px; color: #0f5132;">
            "✓ " <strong>{format!("{center_name} Konvergen")}</strong> " - Algoritma selesai pada iterasi ini"
        </div>
    }
}

fn iteration_card_style() -> &'static str {
    "background: white; border: 1px solid #e9ecef; border-radius: 8px; margin-bottom: 1.5rem; overflow: hidden;"
}

fn iteration_header_style() -> &'static str {
    "background: #f8f9fa; padding: 10px 16px; font-weight: 600; color: #2d3748; border-bottom: 1px solid #e9ecef;"
}

/// Карточки итераций KMeans: центроиды + таблица расстояний.
#[component]
pub fn KmeansIterationCards(iterations: Vec<KmeansIteration>) -> impl IntoView {
    let count = iterations.len();
    view! {
        <div class="iterations-list">
            {iterations.into_iter().enumerate().map(|(idx, iteration)| {
                let is_last = idx + 1 == count;
                view! {
                    <div class="iteration-card" style=iteration_card_style()>
                        <div class="iteration-header" style=iteration_header_style()>
                            {format!("🔄 Iterasi {}{}", iteration.iteration, if is_last { " (Konvergen)" } else { "" })}
                        </div>
                        <div class="iteration-content" style="padding: 16px;">
                            {(!iteration.centroids.is_empty()).then(|| view! {
                                <div class="centroid-section">
                                    <div style="font-size: 1rem; font-weight: 600; margin-bottom: 1rem; color: #333;">"📍 Centroid (Pusat Cluster)"</div>
                                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem;">
                                        {iteration.centroids.iter().map(|centroid| {
                                            let color = badge_color(Some(centroid.cluster_id));
                                            view! {
                                                <div style=format!("border: 2px solid {color}; border-radius: 8px; padding: 1rem; text-align: center;")>
                                                    <div style=format!("font-weight: 700; color: {color}; margin-bottom: 0.75rem;")>
                                                        {format!("C{}", centroid.cluster_id)}
                                                    </div>
                                                    <div style="font-size: 1.25rem; font-weight: 700; font-family: 'Courier New', monospace;">{format_metric(centroid.jumlah_terjual)}</div>
                                                    <div style="font-size: 0.75rem; color: #666;">"Jumlah Terjual"</div>
                                                    <div style="margin-top: 0.5rem;"></div>
                                                    <div style="font-size: 1.25rem; font-weight: 700; font-family: 'Courier New', monospace;">{format_metric(centroid.total_harga)}</div>
                                                    <div style="font-size: 0.75rem; color: #666;">"Total Harga"</div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            })}
                            {(!iteration.cluster_assignments.is_empty()).then(|| view! {
                                <DistanceTable assignments=iteration.cluster_assignments.clone() center_name="Centroid" />
                                {is_last.then(|| view! { <ConvergenceBadge center_name="Centroid" /> })}
                            })}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Карточки итераций KMedoids: медоиды + таблица расстояний.
#[component]
pub fn KmedoidsIterationCards(iterations: Vec<KmedoidsIteration>) -> impl IntoView {
    let count = iterations.len();
    view! {
        <div class="iterations-list">
            {iterations.into_iter().enumerate().map(|(idx, iteration)| {
                let is_last = idx + 1 == count;
                view! {
                    <div class="iteration-card" style=iteration_card_style()>
                        <div class="iteration-header" style=iteration_header_style()>
                            {format!("🔄 Iterasi {}{}", iteration.iteration, if is_last { " (Konvergen)" } else { "" })}
                        </div>
                        <div class="iteration-content" style="padding: 16px;">
                            {(!iteration.medoid_points.is_empty()).then(|| view! {
                                <div class="centroid-section" style="margin-bottom: 1rem;">
                                    <div style="font-size: 1rem; font-weight: 600; margin-bottom: 1rem; color: #333;">"📍 Medoid (Pusat Cluster)"</div>
                                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem;">
                                        {iteration.medoid_points.iter().map(|medoid| {
                                            let color = badge_color(Some(medoid.cluster_id));
                                            view! {
                                                <div style=format!("border: 2px solid {color}; border-radius: 8px; padding: 1.25rem; text-align: center;")>
                                                    <div style=format!("font-size: 1.1rem; font-weight: 700; color: {color}; margin-bottom: 1rem; padding-bottom: 0.5rem; border-bottom: 2px solid {color};")>
                                                        {format!("C{}", medoid.cluster_id)}
                                                    </div>
                                                    <div style="font-size: 0.75rem; color: #666; text-transform: uppercase; letter-spacing: 0.5px; font-weight: 600;">"Jumlah Terjual"</div>
                                                    <div style=format!("font-size: 1.5rem; font-weight: 700; color: {color}; font-family: 'Courier New', monospace;")>{format_metric(medoid.jumlah_terjual)}</div>
                                                    {medoid.total_harga.map(|harga| view! {
                                                        <div style="margin-top: 1rem;">
                                                            <div style="font-size: 0.75rem; color: #666; text-transform: uppercase; letter-spacing: 0.5px; font-weight: 600;">"Total Harga"</div>
                                                            <div style=format!("font-size: 1.5rem; font-weight: 700; color: {color}; font-family: 'Courier New', monospace;")>{format_metric(harga)}</div>
                                                        </div>
                                                    })}
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            })}
                            {(!iteration.cluster_assignments.is_empty()).then(|| view! {
                                <DistanceTable assignments=iteration.cluster_assignments.clone() center_name="Medoid" />
                                {is_last.then(|| view! { <ConvergenceBadge center_name="Medoid" /> })}
                            })}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
