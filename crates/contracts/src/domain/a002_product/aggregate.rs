use serde::{Deserialize, Serialize};

/// Product stock record as served by `GET /warehouses/products/:warehouseId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    /// Total on-hand stock recorded by the backend at count time.
    pub quantity: i64,
    /// Portion of `quantity` already committed to orders.
    #[serde(default)]
    pub reserved_quantity: i64,
    /// Unit cost, used only for shortage valuation.
    #[serde(default)]
    pub cost_price: f64,
}

/// Envelope of `GET /warehouses/products/:warehouseId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseProductsResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
}
