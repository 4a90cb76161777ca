//! Dashboard Layout API
//!
//! The card layout is an opaque array; the editor saves it with a single
//! full-array PUT.

use gloo_net::http::Request;

use super::{authorize, error_message, get_api_base};
use crate::models::DashboardCard;

#[derive(Debug, serde::Deserialize)]
pub struct LayoutResponse {
    pub cards: Vec<DashboardCard>,
}

/// Fetch the saved dashboard layout
pub async fn fetch_layout() -> Result<Vec<DashboardCard>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/dashboard/layout", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: LayoutResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.cards)
}

/// Persist the whole layout array
pub async fn save_layout(cards: &[DashboardCard]) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct LayoutRequest<'a> {
        cards: &'a [DashboardCard],
    }

    let api_base = get_api_base();

    let response = authorize(Request::put(&format!("{}/dashboard/layout", api_base)))
        .json(&LayoutRequest { cards })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
