use serde::{Deserialize, Serialize};

/// Service-request families handled by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestKind {
    MaintenanceContract,
    SafetyPlan,
    EngineeringPlan,
    ExtinguisherMaintenance,
}

impl RequestKind {
    pub const ALL: [RequestKind; 4] = [
        RequestKind::MaintenanceContract,
        RequestKind::SafetyPlan,
        RequestKind::EngineeringPlan,
        RequestKind::ExtinguisherMaintenance,
    ];

    /// Path segment used by the backend routes.
    pub fn as_path(&self) -> &'static str {
        match self {
            RequestKind::MaintenanceContract => "maintenance-contracts",
            RequestKind::SafetyPlan => "safety-plans",
            RequestKind::EngineeringPlan => "engineering-plans",
            RequestKind::ExtinguisherMaintenance => "extinguisher-maintenance",
        }
    }

    pub fn list_name(&self) -> &'static str {
        match self {
            RequestKind::MaintenanceContract => "Maintenance contracts",
            RequestKind::SafetyPlan => "Safety plans",
            RequestKind::EngineeringPlan => "Engineering plans",
            RequestKind::ExtinguisherMaintenance => "Extinguisher maintenance",
        }
    }
}

/// Request lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Completed,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Completed => "Completed",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

/// One service request as served by `GET /requests/:kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: String,
    pub reference: String,
    pub customer_name: String,
    pub city: String,
    pub status: RequestStatus,
    pub requested_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Envelope of `GET /requests/:kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequestsResponse {
    pub success: bool,
    #[serde(default)]
    pub requests: Vec<ServiceRequest>,
}

/// Body of `PATCH /requests/:id/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: RequestStatus,
}

/// Envelope of `PATCH /requests/:id/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
