use crate::shared::api::{get_json, post_empty, post_form};
use contracts::shared::api::StatusResponse;
use contracts::usecases::u200_run_clustering::{
    KmeansIterationsResponse, KmeansRunResponse, KmedoidsIterationsResponse, KmedoidsRunResponse,
    RunClusteringRequest,
};

/// API клиент для запуска кластеризации (u200)
pub async fn run_kmeans(request: &RunClusteringRequest) -> Result<KmeansRunResponse, String> {
    post_form("/preprocessing/kmeans", &request.form_body()).await
}

/// Persisted last KMeans run, or nulls when nothing ran yet.
pub async fn get_kmeans() -> Result<KmeansRunResponse, String> {
    get_json("/preprocessing/kmeans").await
}

pub async fn get_kmeans_iterations() -> Result<KmeansIterationsResponse, String> {
    get_json("/preprocessing/kmeans/iterations").await
}

pub async fn run_kmedoids(request: &RunClusteringRequest) -> Result<KmedoidsRunResponse, String> {
    post_form("/preprocessing/kmedoids", &request.form_body()).await
}

/// Persisted last KMedoids run; mirrors the kmeans read path.
pub async fn get_kmedoids() -> Result<KmedoidsRunResponse, String> {
    get_json("/preprocessing/kmedoids").await
}

pub async fn get_kmedoids_iterations() -> Result<KmedoidsIterationsResponse, String> {
    get_json("/preprocessing/kmedoids/iterations").await
}

/// Сброс всех сохранённых результатов кластеризации.
pub async fn reset_results() -> Result<StatusResponse, String> {
    post_empty("/delete/results").await
}
