use serde::{Deserialize, Serialize};

/// Общий конверт ответа сервера: `{status, message}` либо `{status, error}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Server-supplied failure text, or a generic fallback.
    pub fn error_text(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Unknown error occurred".to_string())
    }

    /// Success text shown in the alert banner.
    pub fn message_text(&self) -> String {
        self.message.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp: StatusResponse =
            serde_json::from_str(r#"{"status":"success","message":"Data tersimpan"}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message_text(), "Data tersimpan");
    }

    #[test]
    fn test_error_envelope_prefers_error_field() {
        let resp: StatusResponse =
            serde_json::from_str(r#"{"status":"error","error":"File kosong"}"#).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.error_text(), "File kosong");
    }

    #[test]
    fn test_error_envelope_fallback() {
        let resp: StatusResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(resp.error_text(), "Unknown error occurred");
    }
}
