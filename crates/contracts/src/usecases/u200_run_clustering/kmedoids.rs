use crate::clustering::{ClusteringAnalysis, KmedoidsIteration, MedoidPoint};
use serde::{Deserialize, Serialize};

/// Ответ `POST /preprocessing/kmedoids`; the `GET` variant mirrors the
/// kmeans read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmedoidsRunResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub davies_bouldin: Option<f64>,
    #[serde(default)]
    pub medoids: Option<Vec<MedoidPoint>>,
    #[serde(default)]
    pub n_iter: Option<u32>,
    #[serde(default)]
    pub max_iterations: Option<u32>,
    #[serde(default)]
    pub analysis: Option<ClusteringAnalysis>,
}

impl KmedoidsRunResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Ответ `GET /preprocessing/kmedoids/iterations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmedoidsIterationsResponse {
    pub status: String,
    #[serde(default)]
    pub iterations: Vec<KmedoidsIteration>,
    #[serde(default)]
    pub analysis: Option<ClusteringAnalysis>,
}

impl KmedoidsIterationsResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Medoids of the converged (last) iteration, the authoritative
    /// ranking key when present.
    pub fn final_medoids(&self) -> Option<&[MedoidPoint]> {
        self.iterations
            .last()
            .map(|iteration| iteration.medoid_points.as_slice())
            .filter(|points| !points.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_medoids_take_last_iteration() {
        let response: KmedoidsIterationsResponse = serde_json::from_str(
            r#"{
                "status": "success",
                "iterations": [
                    {"iteration": 1, "medoid_points": [{"cluster_id": 0, "jumlah_terjual": 5.0}]},
                    {"iteration": 2, "medoid_points": [{"cluster_id": 0, "jumlah_terjual": 9.0}]}
                ]
            }"#,
        )
        .unwrap();
        let medoids = response.final_medoids().unwrap();
        assert_eq!(medoids.len(), 1);
        assert!((medoids[0].jumlah_terjual - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_final_medoids_none_when_empty() {
        let response: KmedoidsIterationsResponse =
            serde_json::from_str(r#"{"status": "success", "iterations": [{"iteration": 1}]}"#)
                .unwrap();
        assert!(response.final_medoids().is_none());
    }
}
