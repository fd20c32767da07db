use serde::{Deserialize, Serialize};

// ============================================================================
// Wire types
// ============================================================================

/// Warehouse record as served by `GET /warehouses`.
///
/// The backend owns the record and its id (opaque string on the wire);
/// the client mutates only `order` through the priority orderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    /// Active flag, independent of ordering.
    pub is_active: bool,
    /// 1-based display priority, contiguous within the list.
    pub order: u32,
}

/// Envelope of `GET /warehouses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehousesResponse {
    pub success: bool,
    #[serde(default)]
    pub warehouses: Vec<Warehouse>,
}

/// Partial PATCH body for `PATCH /warehouses/:id`.
///
/// Only the fields present are updated; the orderer sends `order` alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Envelope of `PATCH /warehouses/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseUpdateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub warehouse: Option<Warehouse>,
}

impl WarehouseUpdateRequest {
    pub fn with_order(order: u32) -> Self {
        Self {
            order: Some(order),
            ..Default::default()
        }
    }
}
