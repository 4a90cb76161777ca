//! Services API

use gloo_net::http::Request;

use super::{authorize, error_message, get_api_base};
use crate::models::Service;

#[derive(Debug, serde::Deserialize)]
pub struct ServiceListResponse {
    pub services: Vec<Service>,
}

/// Payload for creating or replacing a service
#[derive(Debug, Clone, serde::Serialize)]
pub struct ServicePayload {
    pub name: String,
    pub category_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_cost: Option<f64>,
    pub approver_ids: Vec<u32>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fetch all services
pub async fn fetch_services() -> Result<Vec<Service>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/services", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ServiceListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.services)
}

/// Create a new service
pub async fn create_service(payload: &ServicePayload) -> Result<Service, String> {
    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/services", api_base)))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Replace a service record
pub async fn update_service(id: u32, payload: &ServicePayload) -> Result<Service, String> {
    let api_base = get_api_base();

    let response = authorize(Request::put(&format!("{}/services/{}", api_base, id)))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Delete a service
pub async fn delete_service(id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/services/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
