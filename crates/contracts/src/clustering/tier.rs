use super::aggregate::ClusterAggregate;
use super::iterations::MedoidPoint;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Tier assignment assumes exactly three clusters (ids 0, 1, 2).
pub const CLUSTER_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("expected exactly {CLUSTER_COUNT} clusters, got {0}")]
    WrongClusterCount(usize),
    #[error("cluster id {0} out of range 0..{CLUSTER_COUNT}")]
    ClusterOutOfRange(u8),
    #[error("duplicate cluster id {0}")]
    DuplicateCluster(u8),
}

/// Качественный уровень кластера по объёму продаж.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Terlaris,
    Sedang,
    KurangLaris,
}

impl Tier {
    /// Tiers in rank order, best first.
    pub const RANKED: [Tier; CLUSTER_COUNT] = [Tier::Terlaris, Tier::Sedang, Tier::KurangLaris];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Terlaris => "Terlaris",
            Tier::Sedang => "Sedang",
            Tier::KurangLaris => "Kurang Laris",
        }
    }

    /// Label with the marker the dashboards show next to it.
    pub fn label_with_icon(&self) -> &'static str {
        match self {
            Tier::Terlaris => "Terlaris ⭐",
            Tier::Sedang => "Sedang 📊",
            Tier::KurangLaris => "Kurang Laris 📉",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Tier::Terlaris => "#198754",
            Tier::Sedang => "#ffc107",
            Tier::KurangLaris => "#dc3545",
        }
    }

    /// Server-side tier key used in analysis payloads.
    pub fn from_key(key: &str) -> Option<Tier> {
        match key {
            "terlaris" => Some(Tier::Terlaris),
            "sedang" => Some(Tier::Sedang),
            "kurang_laris" => Some(Tier::KurangLaris),
            _ => None,
        }
    }
}

/// Биекция cluster id -> tier: каждый из трёх кластеров получает ровно
/// один уровень.
#[derive(Debug, Clone, PartialEq)]
pub struct TierAssignment {
    // index = cluster id
    tiers: [Tier; CLUSTER_COUNT],
}

impl TierAssignment {
    pub fn tier_of(&self, cluster: u8) -> Option<Tier> {
        self.tiers.get(cluster as usize).copied()
    }

    /// Cluster ids ordered by rank, Terlaris first.
    pub fn ranked_clusters(&self) -> [u8; CLUSTER_COUNT] {
        let mut out = [0u8; CLUSTER_COUNT];
        for (rank, tier) in Tier::RANKED.iter().enumerate() {
            for (cluster, assigned) in self.tiers.iter().enumerate() {
                if assigned == tier {
                    out[rank] = cluster as u8;
                }
            }
        }
        out
    }
}

/// Rank three clusters by per-cluster key, descending. Equal keys order
/// by cluster id ascending, so the assignment is deterministic even when
/// totals collide.
fn rank_by_keys(keys: [f64; CLUSTER_COUNT]) -> TierAssignment {
    let mut order: [usize; CLUSTER_COUNT] = [0, 1, 2];
    order.sort_by(|&a, &b| {
        keys[b]
            .partial_cmp(&keys[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut tiers = [Tier::KurangLaris; CLUSTER_COUNT];
    for (rank, &cluster) in order.iter().enumerate() {
        tiers[cluster] = Tier::RANKED[rank];
    }
    TierAssignment { tiers }
}

/// Rank by the final medoid volume (`jumlah_terjual`). Preferred over
/// aggregate totals when the converged medoids are available.
pub fn rank_by_medoids(medoids: &[MedoidPoint]) -> Result<TierAssignment, AnalysisError> {
    if medoids.len() != CLUSTER_COUNT {
        return Err(AnalysisError::WrongClusterCount(medoids.len()));
    }

    let mut keys = [f64::NAN; CLUSTER_COUNT];
    for medoid in medoids {
        let id = medoid.cluster_id;
        if id as usize >= CLUSTER_COUNT {
            return Err(AnalysisError::ClusterOutOfRange(id));
        }
        if !keys[id as usize].is_nan() {
            return Err(AnalysisError::DuplicateCluster(id));
        }
        keys[id as usize] = medoid.jumlah_terjual;
    }
    Ok(rank_by_keys(keys))
}

/// Rank by aggregated sold volume per cluster. Primary path when no
/// medoid data exists (KMeans, or results not yet fetched).
pub fn rank_by_totals(aggregates: &[ClusterAggregate; CLUSTER_COUNT]) -> TierAssignment {
    rank_by_keys([
        aggregates[0].total,
        aggregates[1].total,
        aggregates[2].total,
    ])
}

/// Degraded deterministic fallback: rank by how many ranges landed in
/// each cluster. Can order clusters differently than `rank_by_totals`
/// on the same data.
pub fn rank_by_range_counts(aggregates: &[ClusterAggregate; CLUSTER_COUNT]) -> TierAssignment {
    rank_by_keys([
        aggregates[0].range_count as f64,
        aggregates[1].range_count as f64,
        aggregates[2].range_count as f64,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates(totals: [f64; 3], range_counts: [u32; 3]) -> [ClusterAggregate; 3] {
        let mut out: [ClusterAggregate; 3] = Default::default();
        for i in 0..3 {
            out[i].total = totals[i];
            out[i].range_count = range_counts[i];
        }
        out
    }

    #[test]
    fn test_ranking_monotonicity() {
        // Strictly decreasing totals map positionally onto tiers.
        let assignment = rank_by_totals(&aggregates([900.0, 500.0, 100.0], [0, 0, 0]));
        assert_eq!(assignment.tier_of(0), Some(Tier::Terlaris));
        assert_eq!(assignment.tier_of(1), Some(Tier::Sedang));
        assert_eq!(assignment.tier_of(2), Some(Tier::KurangLaris));

        let assignment = rank_by_totals(&aggregates([100.0, 900.0, 500.0], [0, 0, 0]));
        assert_eq!(assignment.tier_of(1), Some(Tier::Terlaris));
        assert_eq!(assignment.tier_of(2), Some(Tier::Sedang));
        assert_eq!(assignment.tier_of(0), Some(Tier::KurangLaris));
    }

    #[test]
    fn test_tier_bijection() {
        let assignment = rank_by_totals(&aggregates([42.0, 42.0, 42.0], [1, 2, 3]));
        let mut seen = vec![];
        for cluster in 0..3u8 {
            let tier = assignment.tier_of(cluster).unwrap();
            assert!(!seen.contains(&tier), "tier {tier:?} assigned twice");
            seen.push(tier);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_tie_break_by_cluster_id_ascending() {
        // All keys equal: rank order falls back to cluster id.
        let assignment = rank_by_totals(&aggregates([7.0, 7.0, 7.0], [0, 0, 0]));
        assert_eq!(assignment.tier_of(0), Some(Tier::Terlaris));
        assert_eq!(assignment.tier_of(1), Some(Tier::Sedang));
        assert_eq!(assignment.tier_of(2), Some(Tier::KurangLaris));

        // Partial tie between clusters 1 and 2.
        let assignment = rank_by_totals(&aggregates([1.0, 5.0, 5.0], [0, 0, 0]));
        assert_eq!(assignment.tier_of(1), Some(Tier::Terlaris));
        assert_eq!(assignment.tier_of(2), Some(Tier::Sedang));
        assert_eq!(assignment.tier_of(0), Some(Tier::KurangLaris));
    }

    #[test]
    fn test_fallback_ranks_by_range_count() {
        // Totals would rank 0 > 2 > 1; range counts rank 1 > 0 > 2.
        let aggs = aggregates([500.0, 100.0, 300.0], [2, 5, 1]);
        let fallback = rank_by_range_counts(&aggs);
        assert_eq!(fallback.tier_of(1), Some(Tier::Terlaris));
        assert_eq!(fallback.tier_of(0), Some(Tier::Sedang));
        assert_eq!(fallback.tier_of(2), Some(Tier::KurangLaris));

        // The primary key disagrees on the same data.
        let primary = rank_by_totals(&aggs);
        assert_eq!(primary.tier_of(0), Some(Tier::Terlaris));
    }

    #[test]
    fn test_medoid_ranking_preferred_key() {
        let medoids = vec![
            MedoidPoint {
                cluster_id: 0,
                jumlah_terjual: 12.0,
                total_harga: None,
            },
            MedoidPoint {
                cluster_id: 1,
                jumlah_terjual: 80.0,
                total_harga: None,
            },
            MedoidPoint {
                cluster_id: 2,
                jumlah_terjual: 40.0,
                total_harga: None,
            },
        ];
        let assignment = rank_by_medoids(&medoids).unwrap();
        assert_eq!(assignment.tier_of(1), Some(Tier::Terlaris));
        assert_eq!(assignment.tier_of(2), Some(Tier::Sedang));
        assert_eq!(assignment.tier_of(0), Some(Tier::KurangLaris));
        assert_eq!(assignment.ranked_clusters(), [1, 2, 0]);
    }

    #[test]
    fn test_wrong_cluster_count_rejected() {
        let medoids = vec![MedoidPoint {
            cluster_id: 0,
            jumlah_terjual: 1.0,
            total_harga: None,
        }];
        assert_eq!(
            rank_by_medoids(&medoids),
            Err(AnalysisError::WrongClusterCount(1))
        );
    }

    #[test]
    fn test_duplicate_and_out_of_range_medoids_rejected() {
        let dup = vec![
            MedoidPoint {
                cluster_id: 0,
                jumlah_terjual: 1.0,
                total_harga: None,
            },
            MedoidPoint {
                cluster_id: 0,
                jumlah_terjual: 2.0,
                total_harga: None,
            },
            MedoidPoint {
                cluster_id: 2,
                jumlah_terjual: 3.0,
                total_harga: None,
            },
        ];
        assert_eq!(rank_by_medoids(&dup), Err(AnalysisError::DuplicateCluster(0)));

        let out = vec![
            MedoidPoint {
                cluster_id: 0,
                jumlah_terjual: 1.0,
                total_harga: None,
            },
            MedoidPoint {
                cluster_id: 1,
                jumlah_terjual: 2.0,
                total_harga: None,
            },
            MedoidPoint {
                cluster_id: 7,
                jumlah_terjual: 3.0,
                total_harga: None,
            },
        ];
        assert_eq!(rank_by_medoids(&out), Err(AnalysisError::ClusterOutOfRange(7)));
    }

    #[test]
    fn test_tier_keys_round_trip() {
        for tier in Tier::RANKED {
            let key = match tier {
                Tier::Terlaris => "terlaris",
                Tier::Sedang => "sedang",
                Tier::KurangLaris => "kurang_laris",
            };
            assert_eq!(Tier::from_key(key), Some(tier));
        }
        assert_eq!(Tier::from_key("unknown"), None);
    }
}
