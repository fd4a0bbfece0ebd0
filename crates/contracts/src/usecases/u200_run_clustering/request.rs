use serde::{Deserialize, Serialize};

/// Запрос на запуск кластеризации: количество кластеров.
///
/// The tier pipeline downstream supports k = 3 only; the control
/// defaults to it and the server rejects other values for tiered
/// output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunClusteringRequest {
    pub k: u8,
}

impl Default for RunClusteringRequest {
    fn default() -> Self {
        Self { k: 3 }
    }
}

impl RunClusteringRequest {
    /// Body for the form-encoded POST (`k=<int>`).
    pub fn form_body(&self) -> String {
        format!("k={}", self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body() {
        assert_eq!(RunClusteringRequest::default().form_body(), "k=3");
        assert_eq!(RunClusteringRequest { k: 5 }.form_body(), "k=5");
    }
}
