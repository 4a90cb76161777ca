//! Admin API
//!
//! Users, roles, custom field definitions, and the current session.

use gloo_net::http::Request;

use super::{authorize, error_message, get_api_base};
use crate::models::{CustomField, CustomFieldKind, Role, Session, User};

#[derive(Debug, serde::Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

#[derive(Debug, serde::Deserialize)]
pub struct RoleListResponse {
    pub roles: Vec<Role>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CustomFieldListResponse {
    pub custom_fields: Vec<CustomField>,
}

/// Fetch the authenticated user and effective permissions
pub async fn fetch_session() -> Result<Session, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/session", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ Users ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role_id: u32,
    pub active: bool,
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/users", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: UserListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.users)
}

pub async fn create_user(payload: &UserPayload) -> Result<User, String> {
    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/users", api_base)))
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

pub async fn update_user(id: u32, payload: &UserPayload) -> Result<User, String> {
    let api_base = get_api_base();

    let response = authorize(Request::put(&format!("{}/users/{}", api_base, id)))
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

pub async fn delete_user(id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/users/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

// ============ Roles ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct RolePayload {
    pub name: String,
    pub permissions: Vec<String>,
}

pub async fn fetch_roles() -> Result<Vec<Role>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/roles", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: RoleListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.roles)
}

pub async fn create_role(payload: &RolePayload) -> Result<Role, String> {
    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/roles", api_base)))
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

pub async fn update_role(id: u32, payload: &RolePayload) -> Result<Role, String> {
    let api_base = get_api_base();

    let response = authorize(Request::put(&format!("{}/roles/{}", api_base, id)))
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

pub async fn delete_role(id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/roles/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

// ============ Custom fields ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct CustomFieldPayload {
    pub name: String,
    pub label: String,
    pub kind: CustomFieldKind,
    pub required: bool,
    pub position: i32,
}

pub async fn fetch_custom_fields() -> Result<Vec<CustomField>, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/custom-fields", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: CustomFieldListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.custom_fields)
}

pub async fn create_custom_field(payload: &CustomFieldPayload) -> Result<CustomField, String> {
    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/custom-fields", api_base)))
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

pub async fn delete_custom_field(id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/custom-fields/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
