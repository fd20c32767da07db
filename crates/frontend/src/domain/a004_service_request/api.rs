use contracts::domain::a004_service_request::{
    RequestKind, RequestStatus, ServiceRequest, ServiceRequestsResponse, UpdateStatusRequest,
    UpdateStatusResponse,
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

/// Fetch every request of one kind
pub async fn fetch_requests(kind: RequestKind) -> Result<Vec<ServiceRequest>, String> {
    let url = api_url(&format!("/api/requests/{}", kind.as_path()));
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: ServiceRequestsResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(GENERIC_ERROR.to_string());
    }
    Ok(body.requests)
}

/// Move one request to a new status
pub async fn update_status(id: &str, status: RequestStatus) -> Result<(), String> {
    let url = api_url(&format!(
        "/api/requests/{}/status",
        urlencoding::encode(id)
    ));
    let response = with_auth(Request::patch(&url))
        .json(&UpdateStatusRequest { status })
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: UpdateStatusResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(body.message.unwrap_or_else(|| GENERIC_ERROR.to_string()));
    }
    Ok(())
}
