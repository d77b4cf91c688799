use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
    Error,
}

/// Response payload for /api/faiss-info.
#[derive(Debug, Serialize)]
pub struct FaissInfoResponse {
    pub service_status: ServiceStatus,
    pub service_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectorstore_info: Option<Value>,
}

impl FaissInfoResponse {
    pub fn failed(status: ServiceStatus, service_url: &str, error: String) -> Self {
        Self {
            service_status: status,
            service_url: service_url.to_string(),
            error: Some(error),
            health_check: None,
            vectorstore_info: None,
        }
    }
}
