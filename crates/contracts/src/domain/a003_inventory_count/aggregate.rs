use serde::{Deserialize, Serialize};

/// Count scope: every product of the warehouse, or an operator-selected
/// subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountType {
    Full,
    Partial,
}

impl CountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountType::Full => "full",
            CountType::Partial => "partial",
        }
    }
}

/// Session status at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStatus {
    Draft,
    Completed,
}

/// One counted line of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCountItem {
    pub product_id: String,
    pub counted_quantity: i64,
}

/// Wire body of `POST /inventory-counts`.
///
/// Created client-side and submitted once; the session is not mutated by
/// this client after submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryCountRequest {
    pub warehouse: String,
    pub name: String,
    #[serde(rename = "type")]
    pub count_type: CountType,
    pub notes: String,
    pub items: Vec<InventoryCountItem>,
    pub selected_products: Vec<String>,
    pub created_by: Option<String>,
    pub status: CountStatus,
}

/// Envelope of `POST /inventory-counts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInventoryCountResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
