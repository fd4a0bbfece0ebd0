use crate::shared::components::cluster_badge::ClusterBadge;
use crate::shared::components::table::number_format::format_qty;
use contracts::clustering::{
    aggregate_clusters, analysis_rows, rank_by_medoids, rank_by_range_counts, rank_by_totals,
    tier_groups, tier_summary, ClusteringAnalysis, MedoidPoint, TierAssignment,
};
use leptos::prelude::*;

/// Which key ranks the clusters for the tier tables.
///
/// The medoid path degrades to the range-count fallback when the
/// converged medoids have not been fetched; the totals path is for the
/// algorithm without a medoid concept. Both feed the same ranking
/// contract, so the two dashboards cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub enum RankingSource {
    AggregateTotals,
    FinalMedoids(Vec<MedoidPoint>),
}

fn no_data_row() -> AnyView {
    view! {
        <table class="table" style="width: 100%; border-collapse: collapse; border: 1px solid #dee2e6; background: white;">
            <tbody>
                <tr>
                    <td colspan="4" style="padding: 16px; text-align: center; color: #6c757d;">"Tidak ada data"</td>
                </tr>
            </tbody>
        </table>
    }
    .into_any()
}

fn config_error(message: String) -> AnyView {
    view! {
        <div style="padding: 10px 14px; background: #f8d7da; border: 1px solid #f5c2c7; border-radius: 6px; color: #842029;">
            <strong>"Konfigurasi tidak valid: "</strong>
            {message}
        </div>
    }
    .into_any()
}

/// Итоговая таблица результатов + сводка уровней.
#[component]
pub fn FinalResults(analysis: ClusteringAnalysis, ranking: RankingSource) -> impl IntoView {
    if analysis.is_empty() {
        return no_data_row();
    }

    let rows = analysis_rows(&analysis);
    let aggregates = match aggregate_clusters(&analysis) {
        Ok(aggregates) => aggregates,
        Err(e) => return config_error(e.to_string()),
    };
    let assignment: Result<TierAssignment, _> = match &ranking {
        RankingSource::AggregateTotals => Ok(rank_by_totals(&aggregates)),
        RankingSource::FinalMedoids(medoids) if medoids.is_empty() => {
            Ok(rank_by_range_counts(&aggregates))
        }
        RankingSource::FinalMedoids(medoids) => rank_by_medoids(medoids),
    };
    let assignment = match assignment {
        Ok(assignment) => assignment,
        Err(e) => return config_error(e.to_string()),
    };
    let summary = tier_summary(&assignment, &aggregates);

    view! {
        <div class="final-results">
            <div class="table-responsive">
                <table class="table" style="width: 100%; border-collapse: collapse; border: 1px solid #dee2e6; border-radius: 6px; background: white;">
                    <thead style="background-color: #f8f9fa;">
                        <tr>
                            <th style="padding: 0.75rem; font-weight: 600; color: #333; text-align: left;">"Kategori"</th>
                            <th style="padding: 0.75rem; font-weight: 600; color: #333; text-align: left;">"Size"</th>
                            <th style="padding: 0.75rem; font-weight: 600; color: #333; text-align: right;">"Jumlah Terjual"</th>
                            <th style="padding: 0.75rem; font-weight: 600; color: #333; text-align: center;">"Cluster"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|row| view! {
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <td style="padding: 0.75rem;">{row.kategori.clone()}</td>
                                <td style="padding: 0.75rem;">{row.range.clone()}</td>
                                <td style="padding: 0.75rem; text-align: right;">{format_qty(row.total_terjual)}</td>
                                <td style="padding: 0.75rem; text-align: center;">
                                    <ClusterBadge cluster=row.cluster />
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Tier summary, best tier first
            <div class="table-responsive" style="margin-top: 1rem;">
                <table class="table" style="width: 100%; border-collapse: collapse; border: 1px solid #dee2e6; border-radius: 6px; background: white;">
                    <thead style="background-color: #f8f9fa;">
                        <tr>
                            <th style="padding: 0.75rem; font-weight: 600; color: #333; text-align: left;">"CLUSTER"</th>
                            <th style="padding: 0.75rem; font-weight: 600; color: #333; text-align: right;">"JUMLAH"</th>
                            <th style="padding: 0.75rem; font-weight: 600; color: #333; text-align: left;">"DESKRIPSI"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {summary.into_iter().map(|row| view! {
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <td style=format!("padding: 0.75rem; font-weight: 600; color: {};", row.tier.color())>
                                    {format!("C{}", row.cluster)}
                                </td>
                                <td style="padding: 0.75rem; text-align: right; font-weight: 500;">{format_qty(row.total)}</td>
                                <td style="padding: 0.75rem;">{row.tier.label_with_icon()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
    .into_any()
}

/// Диапазоны одной категории, сгруппированные по уровню продаж.
#[component]
pub fn TierAnalysisSection(analysis: ClusteringAnalysis) -> impl IntoView {
    let sections = [
        ("✓ Standard", "#0d6efd", tier_groups(&analysis.standard)),
        ("✗ Non-Standard", "#dc3545", tier_groups(&analysis.non_standard)),
    ];

    view! {
        <div class="tier-analysis">
            {sections.into_iter().map(|(title, color, groups)| view! {
                <div class="category-wrapper" style="margin-bottom: 2rem;">
                    <h5 style=format!("font-weight: 700; margin-bottom: 1rem; padding-bottom: 0.5rem; border-bottom: 3px solid {color}; color: {color};")>
                        {title}
                    </h5>
                    {if groups.is_empty() {
                        view! { <p style="color: #6c757d; text-align: center; padding: 1rem 0;">"Tidak ada data"</p> }.into_any()
                    } else {
                        groups.into_iter().map(|group| {
                            let tier = group.tier;
                            view! {
                                <div class="tier-block" style="margin-bottom: 1.5rem;">
                                    <h6 style=format!("color: {}; font-weight: 600; padding-bottom: 0.5rem; border-bottom: 2px solid {};", tier.color(), tier.color())>
                                        {tier.label_with_icon()}
                                    </h6>
                                    <table class="table" style="width: 100%; border-collapse: collapse; border: 1px solid #dee2e6; background: white;">
                                        <thead style="background-color: #f8f9fa;">
                                            <tr>
                                                <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: left;">"Kategori"</th>
                                                <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: left;">"Size"</th>
                                                <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: right;">"Jumlah Terjual"</th>
                                                <th style="padding: 0.6rem; font-weight: 600; color: #333; text-align: center;">"Cluster"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {group.rows.into_iter().enumerate().map(|(idx, row)| view! {
                                                <tr style=format!("background-color: {};", if idx % 2 == 0 { "white" } else { "#f9f9f9" })>
                                                    <td style="padding: 0.6rem;">{row.kategori.clone()}</td>
                                                    <td style="padding: 0.6rem;">{row.range.clone()}</td>
                                                    <td style="padding: 0.6rem; text-align: right; font-weight: 500;">{format_qty(row.total_terjual)}</td>
                                                    <td style="padding: 0.6rem; text-align: center;">
                                                        <ClusterBadge cluster=row.cluster />
                                                    </td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
            }).collect_view()}
        </div>
    }
}
