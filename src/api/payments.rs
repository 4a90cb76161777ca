//! Payments API
//!
//! CRUD plus the approval workflow actions. Approval transitions POST to
//! `/payments/{id}/submit|approve|reject`; the backend owns the lifecycle
//! and returns the updated record.

use gloo_net::http::Request;
use std::collections::HashMap;

use super::{authorize, error_message, get_api_base, window_query};
use crate::models::{Approval, Payment};

#[derive(Debug, serde::Deserialize)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApprovalListResponse {
    pub approvals: Vec<Approval>,
}

/// Payload for creating or replacing a payment record
#[derive(Debug, Clone, serde::Serialize)]
pub struct PaymentPayload {
    pub amount: f64,
    pub description: String,
    pub due_date: i64,
    pub category_id: u32,
    pub service_id: u32,
    pub contractor_id: u32,
    pub legal_entity_id: u32,
    pub department_id: u32,
    pub custom_values: HashMap<String, serde_json::Value>,
}

/// Fetch payments, optionally restricted to a time window
pub async fn fetch_payments(window: Option<(i64, i64)>) -> Result<Vec<Payment>, String> {
    let api_base = get_api_base();
    let query = window_query(window);

    let response = authorize(Request::get(&format!("{}/payments{}", api_base, query)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: PaymentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.payments)
}

/// Create a new payment (starts in Draft)
pub async fn create_payment(payload: &PaymentPayload) -> Result<Payment, String> {
    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/payments", api_base)))
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

/// Replace a payment record
pub async fn update_payment(id: u32, payload: &PaymentPayload) -> Result<Payment, String> {
    let api_base = get_api_base();

    let response = authorize(Request::put(&format!("{}/payments/{}", api_base, id)))
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

/// Delete a payment
pub async fn delete_payment(id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/payments/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

async fn transition(id: u32, action: &str, comment: Option<String>) -> Result<Payment, String> {
    #[derive(serde::Serialize)]
    struct TransitionRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    }

    let api_base = get_api_base();

    let response = authorize(Request::post(&format!(
        "{}/payments/{}/{}",
        api_base, id, action
    )))
    .json(&TransitionRequest { comment })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Submit a draft payment for approval
pub async fn submit_payment(id: u32) -> Result<Payment, String> {
    transition(id, "submit", None).await
}

/// Approve a submitted payment
pub async fn approve_payment(id: u32, comment: Option<String>) -> Result<Payment, String> {
    transition(id, "approve", comment).await
}

/// Reject a submitted payment
pub async fn reject_payment(id: u32, comment: Option<String>) -> Result<Payment, String> {
    transition(id, "reject", comment).await
}

/// Mark an approved payment as paid
pub async fn mark_payment_paid(id: u32) -> Result<Payment, String> {
    transition(id, "pay", None).await
}

/// Export payments as a JSON document
pub async fn export_payments(window: Option<(i64, i64)>) -> Result<String, String> {
    let api_base = get_api_base();
    let query = window_query(window);

    let response = authorize(Request::get(&format!(
        "{}/payments/export{}",
        api_base, query
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.text().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the approval log of a payment
pub async fn fetch_approvals(payment_id: u32) -> Result<Vec<Approval>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!(
        "{}/payments/{}/approvals",
        api_base, payment_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ApprovalListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.approvals)
}
