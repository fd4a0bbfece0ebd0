use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Центроид одной итерации KMeans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroidPoint {
    pub cluster_id: u8,
    pub jumlah_terjual: f64,
    pub total_harga: f64,
}

/// Медоид кластера: представительная точка, выбранная из данных.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedoidPoint {
    pub cluster_id: u8,
    pub jumlah_terjual: f64,
    #[serde(default)]
    pub total_harga: Option<f64>,
}

/// Назначение одной точки данных в итерации: расстояния до каждого
/// центра (`C0`/`C1`/`C2`) и выбранный кластер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    pub kategori: String,
    pub size_range: String,
    pub jumlah_terjual: f64,
    pub distances: BTreeMap<String, f64>,
    pub assigned_cluster: String,
}

impl ClusterAssignment {
    /// Distance to a given center, 0.0 when the key is missing (the
    /// original renders missing distances as `0.000`).
    pub fn distance_to(&self, label: &str) -> f64 {
        self.distances.get(label).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmeansIteration {
    pub iteration: u32,
    #[serde(default)]
    pub centroids: Vec<CentroidPoint>,
    #[serde(default)]
    pub cluster_assignments: Vec<ClusterAssignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmedoidsIteration {
    pub iteration: u32,
    #[serde(default)]
    pub medoid_points: Vec<MedoidPoint>,
    #[serde(default)]
    pub cluster_assignments: Vec<ClusterAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_distances() {
        let assignment: ClusterAssignment = serde_json::from_str(
            r#"{
                "kategori": "Standard",
                "size_range": "33-36",
                "jumlah_terjual": 42.0,
                "distances": {"C0": 1.25, "C1": 0.5},
                "assigned_cluster": "C1"
            }"#,
        )
        .unwrap();
        assert!((assignment.distance_to("C1") - 0.5).abs() < 1e-9);
        // Missing center renders as zero, matching the dashboards.
        assert_eq!(assignment.distance_to("C2"), 0.0);
    }

    #[test]
    fn test_kmedoids_iteration_defaults() {
        let iteration: KmedoidsIteration =
            serde_json::from_str(r#"{"iteration": 1}"#).unwrap();
        assert!(iteration.medoid_points.is_empty());
        assert!(iteration.cluster_assignments.is_empty());
    }
}
