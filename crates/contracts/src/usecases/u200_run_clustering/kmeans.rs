use crate::clustering::{ClusteringAnalysis, KmeansIteration};
use serde::{Deserialize, Serialize};

/// Ответ `POST /preprocessing/kmeans`; the `GET` variant returns the
/// persisted last run with the same shape, or nulls when nothing ran
/// yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmeansRunResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub inertia: Option<f64>,
    #[serde(default)]
    pub davies_bouldin: Option<f64>,
    #[serde(default)]
    pub analysis: Option<ClusteringAnalysis>,
}

impl KmeansRunResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Ответ `GET /preprocessing/kmeans/iterations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmeansIterationsResponse {
    pub status: String,
    #[serde(default)]
    pub iterations: Vec<KmeansIteration>,
    #[serde(default)]
    pub analysis: Option<ClusteringAnalysis>,
}

impl KmeansIterationsResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
