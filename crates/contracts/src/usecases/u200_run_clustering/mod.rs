pub mod kmeans;
pub mod kmedoids;
pub mod request;

pub use kmeans::{KmeansIterationsResponse, KmeansRunResponse};
pub use kmedoids::{KmedoidsIterationsResponse, KmedoidsRunResponse};
pub use request::RunClusteringRequest;
