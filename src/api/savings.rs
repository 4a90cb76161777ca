//! Savings API

use gloo_net::http::Request;

use super::{authorize, error_message, get_api_base};
use crate::models::Saving;

#[derive(Debug, serde::Deserialize)]
pub struct SavingListResponse {
    pub savings: Vec<Saving>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SavingPayload {
    pub service_id: u32,
    pub department_id: u32,
    pub amount: f64,
    pub reason: String,
    pub recorded_on: i64,
}

/// Fetch all cost-saving records
pub async fn fetch_savings() -> Result<Vec<Saving>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/savings", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: SavingListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.savings)
}

/// Record a new saving
pub async fn create_saving(payload: &SavingPayload) -> Result<Saving, String> {
    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/savings", api_base)))
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

/// Delete a saving record
pub async fn delete_saving(id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/savings/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
