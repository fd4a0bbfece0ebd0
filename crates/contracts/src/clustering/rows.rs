use super::aggregate::ClusterAggregate;
use super::analysis::{ClusteringAnalysis, RangeRecord};
use super::tier::{Tier, TierAssignment, CLUSTER_COUNT};
use std::collections::BTreeMap;

/// Строка итоговой таблицы результатов: одна на пару (категория,
/// диапазон).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    pub kategori: String,
    pub range: String,
    pub total_terjual: f64,
    pub cluster: Option<u8>,
}

impl AnalysisRow {
    /// Badge text: `C<id>` or `-` when the range is unassigned.
    pub fn badge(&self) -> String {
        match self.cluster {
            Some(id) => format!("C{id}"),
            None => "-".to_string(),
        }
    }
}

/// Flatten an analysis payload into display rows: Standard ranges first,
/// then Non-Standard, each in range-label order. The Standard group
/// always reads `Standard`; Non-Standard ranges take the kategori of
/// their first underlying row.
pub fn analysis_rows(analysis: &ClusteringAnalysis) -> Vec<AnalysisRow> {
    let mut rows = Vec::with_capacity(analysis.standard.len() + analysis.non_standard.len());

    for (range, record) in &analysis.standard {
        rows.push(AnalysisRow {
            kategori: "Standard".to_string(),
            range: range.clone(),
            total_terjual: record.total_terjual,
            cluster: record.dominant_cluster,
        });
    }
    for (range, record) in &analysis.non_standard {
        rows.push(AnalysisRow {
            kategori: record
                .first_kategori()
                .unwrap_or("Non-Standard")
                .to_string(),
            range: range.clone(),
            total_terjual: record.total_terjual,
            cluster: record.dominant_cluster,
        });
    }
    rows
}

/// Строка сводной таблицы уровней.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSummaryRow {
    pub cluster: u8,
    pub total: f64,
    pub tier: Tier,
}

/// Summary rows ordered by tier rank (Terlaris first), not by cluster
/// id. This is the display ordering of the tier table, distinct from
/// the raw per-range table.
pub fn tier_summary(
    assignment: &TierAssignment,
    aggregates: &[ClusterAggregate; CLUSTER_COUNT],
) -> Vec<TierSummaryRow> {
    assignment
        .ranked_clusters()
        .iter()
        .map(|&cluster| TierSummaryRow {
            cluster,
            total: aggregates[cluster as usize].total,
            tier: assignment
                .tier_of(cluster)
                .unwrap_or(Tier::KurangLaris),
        })
        .collect()
}

/// Диапазоны одной категории, сгруппированные по уровню.
#[derive(Debug, Clone, PartialEq)]
pub struct TierGroup {
    pub tier: Tier,
    pub rows: Vec<AnalysisRow>,
}

/// Group a category's ranges by the server-precomputed tier key, in
/// rank order. Ranges without a tier key fall into Kurang Laris; only
/// ranges with an item list are shown, and their total is the sum of
/// the underlying rows.
pub fn tier_groups(category_data: &BTreeMap<String, RangeRecord>) -> Vec<TierGroup> {
    let mut groups: Vec<TierGroup> = Tier::RANKED
        .iter()
        .map(|&tier| TierGroup {
            tier,
            rows: Vec::new(),
        })
        .collect();

    for (range, record) in category_data {
        let Some(items) = record.items.as_ref() else {
            continue;
        };
        let tier = record
            .tier
            .as_deref()
            .and_then(Tier::from_key)
            .unwrap_or(Tier::KurangLaris);
        let total: f64 = items.iter().map(|item| item.jumlah_terjual).sum();
        let rank = Tier::RANKED.iter().position(|&t| t == tier).unwrap_or(2);
        groups[rank].rows.push(AnalysisRow {
            kategori: record.first_kategori().unwrap_or("-").to_string(),
            range: range.clone(),
            total_terjual: total,
            cluster: record.dominant_cluster,
        });
    }

    groups.retain(|group| !group.rows.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::analysis::RangeItem;
    use crate::clustering::{aggregate_clusters, rank_by_totals};

    fn record(
        total: f64,
        cluster: Option<u8>,
        kategori: Option<&str>,
        tier: Option<&str>,
    ) -> RangeRecord {
        RangeRecord {
            total_terjual: total,
            dominant_cluster: cluster,
            items: kategori.map(|k| {
                vec![RangeItem {
                    kategori: k.to_string(),
                    jumlah_terjual: total,
                }]
            }),
            tier: tier.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_analysis_rows_kategori_and_badges() {
        let mut analysis = ClusteringAnalysis::default();
        analysis
            .standard
            .insert("33-36".to_string(), record(120.0, Some(1), Some("Standard"), None));
        analysis
            .non_standard
            .insert("Jumbo".to_string(), record(60.0, None, Some("Custom"), None));
        analysis
            .non_standard
            .insert("Anak".to_string(), record(10.0, Some(2), None, None));

        let rows = analysis_rows(&analysis);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kategori, "Standard");
        assert_eq!(rows[0].badge(), "C1");
        // Non-standard rows in range-label order: Anak before Jumbo.
        assert_eq!(rows[1].kategori, "Non-Standard");
        assert_eq!(rows[1].badge(), "C2");
        assert_eq!(rows[2].kategori, "Custom");
        assert_eq!(rows[2].badge(), "-");
    }

    #[test]
    fn test_tier_summary_ordered_by_rank() {
        let mut analysis = ClusteringAnalysis::default();
        analysis
            .standard
            .insert("a".to_string(), record(100.0, Some(0), None, None));
        analysis
            .standard
            .insert("b".to_string(), record(900.0, Some(1), None, None));
        analysis
            .standard
            .insert("c".to_string(), record(500.0, Some(2), None, None));

        let aggregates = aggregate_clusters(&analysis).unwrap();
        let assignment = rank_by_totals(&aggregates);
        let summary = tier_summary(&assignment, &aggregates);

        assert_eq!(summary[0].cluster, 1);
        assert_eq!(summary[0].tier, Tier::Terlaris);
        assert!((summary[0].total - 900.0).abs() < 1e-9);
        assert_eq!(summary[1].cluster, 2);
        assert_eq!(summary[1].tier, Tier::Sedang);
        assert_eq!(summary[2].cluster, 0);
        assert_eq!(summary[2].tier, Tier::KurangLaris);
    }

    #[test]
    fn test_tier_groups_rank_order_and_default_tier() {
        let mut category = BTreeMap::new();
        category.insert(
            "33-36".to_string(),
            record(40.0, Some(2), Some("Standard"), Some("kurang_laris")),
        );
        category.insert(
            "37-40".to_string(),
            record(300.0, Some(0), Some("Standard"), Some("terlaris")),
        );
        // No tier key -> Kurang Laris; no items -> skipped entirely.
        category.insert("41-44".to_string(), record(25.0, Some(1), Some("Standard"), None));
        category.insert("45-48".to_string(), record(5.0, None, None, Some("sedang")));

        let groups = tier_groups(&category);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tier, Tier::Terlaris);
        assert_eq!(groups[0].rows[0].range, "37-40");
        assert_eq!(groups[1].tier, Tier::KurangLaris);
        let ranges: Vec<_> = groups[1].rows.iter().map(|r| r.range.as_str()).collect();
        assert_eq!(ranges, vec!["33-36", "41-44"]);
    }
}
