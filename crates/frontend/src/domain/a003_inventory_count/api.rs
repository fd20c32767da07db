use contracts::domain::a002_product::{Product, WarehouseProductsResponse};
use contracts::domain::a003_inventory_count::{
    CreateInventoryCountRequest, CreateInventoryCountResponse,
};
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::{api_url, error_from_response, network_error, GENERIC_ERROR};
use crate::shared::session;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match session::auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

/// Fetch the product list of one warehouse
pub async fn fetch_warehouse_products(warehouse_id: &str) -> Result<Vec<Product>, String> {
    let url = api_url(&format!(
        "/api/warehouses/products/{}",
        urlencoding::encode(warehouse_id)
    ));
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: WarehouseProductsResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(GENERIC_ERROR.to_string());
    }
    Ok(body.products)
}

/// Submit a count session
pub async fn submit_count(request: &CreateInventoryCountRequest) -> Result<(), String> {
    let response = with_auth(Request::post(&api_url("/api/inventory-counts")))
        .json(request)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: CreateInventoryCountResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(body.message.unwrap_or_else(|| GENERIC_ERROR.to_string()));
    }
    Ok(())
}
