use contracts::domain::a001_warehouse::{
    Warehouse, WarehouseUpdateRequest, WarehouseUpdateResponse, WarehousesResponse,
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

/// Fetch all warehouses
pub async fn fetch_warehouses() -> Result<Vec<Warehouse>, String> {
    let response = with_auth(Request::get(&api_url("/api/warehouses")))
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: WarehousesResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(GENERIC_ERROR.to_string());
    }
    Ok(body.warehouses)
}

/// Patch a single warehouse with partial fields.
pub async fn update_warehouse(
    id: &str,
    update: &WarehouseUpdateRequest,
) -> Result<(), String> {
    let url = api_url(&format!("/api/warehouses/{}", urlencoding::encode(id)));
    let response = with_auth(Request::patch(&url))
        .json(update)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: WarehouseUpdateResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(body.message.unwrap_or_else(|| GENERIC_ERROR.to_string()));
    }
    Ok(())
}

/// Persist the current in-memory order, one PATCH per warehouse.
///
/// Not transactional: a failure mid-way leaves the earlier rows updated on
/// the backend. The first error is reported and the caller may retry the
/// whole save.
pub async fn save_order(items: &[Warehouse]) -> Result<(), String> {
    for warehouse in items {
        update_warehouse(
            &warehouse.id,
            &WarehouseUpdateRequest::with_order(warehouse.order),
        )
        .await?;
    }
    Ok(())
}
