use super::analysis::{ClusteringAnalysis, RangeRecord};
use super::tier::{AnalysisError, CLUSTER_COUNT};

/// Накопленные показатели одного кластера за проход рендера.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClusterAggregate {
    /// Number of contributing sales rows.
    pub count: u64,
    /// Sum of `total_terjual` across assigned ranges.
    pub total: f64,
    /// Number of ranges assigned to this cluster (one per range, not per
    /// underlying row).
    pub range_count: u32,
}

/// Reduce an analysis payload into per-cluster totals.
///
/// Ranges without a resolved `dominant_cluster` contribute nothing; a
/// cluster id outside 0..3 is a malformed payload and is rejected. Sums
/// are commutative, so the result does not depend on map iteration
/// order.
pub fn aggregate_clusters(
    analysis: &ClusteringAnalysis,
) -> Result<[ClusterAggregate; CLUSTER_COUNT], AnalysisError> {
    aggregate_records(
        analysis
            .standard
            .values()
            .chain(analysis.non_standard.values()),
    )
}

/// Aggregation over any record order; both groups feed the same fold.
pub fn aggregate_records<'a>(
    records: impl Iterator<Item = &'a RangeRecord>,
) -> Result<[ClusterAggregate; CLUSTER_COUNT], AnalysisError> {
    let mut aggregates: [ClusterAggregate; CLUSTER_COUNT] = Default::default();

    for record in records {
        let Some(cluster) = record.dominant_cluster else {
            continue;
        };
        if cluster as usize >= CLUSTER_COUNT {
            return Err(AnalysisError::ClusterOutOfRange(cluster));
        }
        let agg = &mut aggregates[cluster as usize];
        agg.count += record.item_count();
        agg.total += record.total_terjual;
        agg.range_count += 1;
    }

    Ok(aggregates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::analysis::{RangeItem, RangeRecord};
    use std::collections::BTreeMap;

    fn record(total: f64, cluster: Option<u8>, items: usize) -> RangeRecord {
        RangeRecord {
            total_terjual: total,
            dominant_cluster: cluster,
            items: (items > 0).then(|| {
                (0..items)
                    .map(|_| RangeItem {
                        kategori: "Standard".to_string(),
                        jumlah_terjual: total / items as f64,
                    })
                    .collect()
            }),
            tier: None,
        }
    }

    fn analysis_fixture() -> ClusteringAnalysis {
        let mut standard = BTreeMap::new();
        standard.insert("33-36".to_string(), record(120.0, Some(0), 3));
        standard.insert("37-40".to_string(), record(80.0, Some(1), 2));
        standard.insert("41-44".to_string(), record(15.5, Some(0), 0));

        let mut non_standard = BTreeMap::new();
        non_standard.insert("Jumbo".to_string(), record(60.0, Some(2), 1));
        non_standard.insert("Anak".to_string(), record(999.0, None, 4));

        ClusteringAnalysis {
            standard,
            non_standard,
        }
    }

    #[test]
    fn test_aggregation_counts_totals_and_ranges() {
        let aggregates = aggregate_clusters(&analysis_fixture()).unwrap();

        // Cluster 0: ranges 33-36 (3 items) and 41-44 (no item list -> 1).
        assert_eq!(aggregates[0].count, 4);
        assert!((aggregates[0].total - 135.5).abs() < 1e-9);
        assert_eq!(aggregates[0].range_count, 2);

        assert_eq!(aggregates[1].count, 2);
        assert!((aggregates[1].total - 80.0).abs() < 1e-9);
        assert_eq!(aggregates[1].range_count, 1);

        assert_eq!(aggregates[2].count, 1);
        assert!((aggregates[2].total - 60.0).abs() < 1e-9);
        assert_eq!(aggregates[2].range_count, 1);
    }

    #[test]
    fn test_unassigned_range_contributes_nothing() {
        let aggregates = aggregate_clusters(&analysis_fixture()).unwrap();
        let grand_total: f64 = aggregates.iter().map(|a| a.total).sum();
        // The 999.0 range with no dominant cluster is excluded everywhere.
        assert!((grand_total - 275.5).abs() < 1e-9);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        // Run the same records through every rotation and the reversal
        // of one ordering; totals must agree within float tolerance.
        let base = analysis_fixture();
        let baseline = aggregate_clusters(&base).unwrap();

        let records: Vec<&RangeRecord> = base
            .standard
            .values()
            .chain(base.non_standard.values())
            .collect();

        let mut orderings: Vec<Vec<&RangeRecord>> = (0..records.len())
            .map(|shift| {
                let mut rotated = records.clone();
                rotated.rotate_left(shift);
                rotated
            })
            .collect();
        let mut reversed = records.clone();
        reversed.reverse();
        orderings.push(reversed);

        for ordering in orderings {
            let aggregates = aggregate_records(ordering.into_iter()).unwrap();
            for (a, b) in aggregates.iter().zip(baseline.iter()) {
                assert_eq!(a.count, b.count);
                assert_eq!(a.range_count, b.range_count);
                assert!((a.total - b.total).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_group_split_does_not_matter() {
        // Aggregation only looks at the record, not which group holds it.
        let base = analysis_fixture();
        let baseline = aggregate_clusters(&base).unwrap();
        let swapped = ClusteringAnalysis {
            standard: base.non_standard.clone(),
            non_standard: base.standard.clone(),
        };
        assert_eq!(aggregate_clusters(&swapped).unwrap(), baseline);
    }

    #[test]
    fn test_out_of_range_cluster_rejected() {
        let mut analysis = ClusteringAnalysis::default();
        analysis
            .standard
            .insert("33-36".to_string(), record(10.0, Some(3), 1));
        assert_eq!(
            aggregate_clusters(&analysis),
            Err(AnalysisError::ClusterOutOfRange(3))
        );
    }
}
