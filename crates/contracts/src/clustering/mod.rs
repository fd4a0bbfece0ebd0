pub mod aggregate;
pub mod analysis;
pub mod iterations;
pub mod rows;
pub mod tier;

pub use aggregate::{aggregate_clusters, aggregate_records, ClusterAggregate};
pub use analysis::{ClusteringAnalysis, RangeItem, RangeRecord};
pub use iterations::{
    CentroidPoint, ClusterAssignment, KmeansIteration, KmedoidsIteration, MedoidPoint,
};
pub use rows::{analysis_rows, tier_groups, tier_summary, AnalysisRow, TierGroup, TierSummaryRow};
pub use tier::{
    rank_by_medoids, rank_by_range_counts, rank_by_totals, AnalysisError, Tier, TierAssignment,
    CLUSTER_COUNT,
};
