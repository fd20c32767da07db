use contracts::domain::a005_sms_template::{
    SmsTemplate, SmsTemplatesResponse, UpdateSmsTemplateRequest, UpdateSmsTemplateResponse,
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

/// Fetch all notification templates
pub async fn fetch_templates() -> Result<Vec<SmsTemplate>, String> {
    let response = with_auth(Request::get(&api_url("/api/sms-templates")))
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: SmsTemplatesResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(GENERIC_ERROR.to_string());
    }
    Ok(body.templates)
}

/// Save one template's edited fields
pub async fn update_template(id: &str, update: &UpdateSmsTemplateRequest) -> Result<(), String> {
    let url = api_url(&format!("/api/sms-templates/{}", urlencoding::encode(id)));
    let response = with_auth(Request::patch(&url))
        .json(update)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: UpdateSmsTemplateResponse = response.json().await.map_err(network_error)?;
    if !body.success {
        return Err(body.message.unwrap_or_else(|| GENERIC_ERROR.to_string()));
    }
    Ok(())
}
