//! Tickets API
//!
//! Support tickets and their comment threads.

use gloo_net::http::Request;

use super::{authorize, error_message, get_api_base};
use crate::models::{Comment, Ticket, TicketStatus};

#[derive(Debug, serde::Deserialize)]
pub struct TicketListResponse {
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
}

/// Fetch all tickets
pub async fn fetch_tickets() -> Result<Vec<Ticket>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/tickets", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: TicketListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.tickets)
}

/// Open a new ticket
pub async fn create_ticket(subject: &str, body: &str) -> Result<Ticket, String> {
    #[derive(serde::Serialize)]
    struct CreateTicketRequest {
        subject: String,
        body: String,
    }

    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/tickets", api_base)))
        .json(&CreateTicketRequest {
            subject: subject.to_string(),
            body: body.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Change a ticket's status
pub async fn update_ticket_status(id: u32, status: TicketStatus) -> Result<Ticket, String> {
    #[derive(serde::Serialize)]
    struct StatusRequest {
        status: TicketStatus,
    }

    let api_base = get_api_base();

    let response = authorize(Request::put(&format!("{}/tickets/{}/status", api_base, id)))
        .json(&StatusRequest { status })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a ticket's comment thread
pub async fn fetch_comments(ticket_id: u32) -> Result<Vec<Comment>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!(
        "{}/tickets/{}/comments",
        api_base, ticket_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: CommentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.comments)
}

/// Add a comment to a ticket
pub async fn add_comment(ticket_id: u32, body: &str) -> Result<Comment, String> {
    #[derive(serde::Serialize)]
    struct CommentRequest {
        body: String,
    }

    let api_base = get_api_base();

    let response = authorize(Request::post(&format!(
        "{}/tickets/{}/comments",
        api_base, ticket_id
    )))
    .json(&CommentRequest {
        body: body.to_string(),
    })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}
