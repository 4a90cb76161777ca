//! Directory API
//!
//! Contractors, legal entities, customer departments, and categories.

use gloo_net::http::Request;

use super::{authorize, error_message, get_api_base};
use crate::models::{Category, Contractor, Department, LegalEntity};

#[derive(Debug, serde::Deserialize)]
pub struct ContractorListResponse {
    pub contractors: Vec<Contractor>,
}

#[derive(Debug, serde::Deserialize)]
pub struct LegalEntityListResponse {
    pub legal_entities: Vec<LegalEntity>,
}

#[derive(Debug, serde::Deserialize)]
pub struct DepartmentListResponse {
    pub departments: Vec<Department>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

async fn fetch_list<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let api_base = get_api_base();

    let response = authorize(Request::get(&format!("{}/{}", api_base, path)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

async fn create_record<B, T>(path: &str, payload: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let api_base = get_api_base();

    let response = authorize(Request::post(&format!("{}/{}", api_base, path)))
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

async fn update_record<B, T>(path: &str, id: u32, payload: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let api_base = get_api_base();

    let response = authorize(Request::put(&format!("{}/{}/{}", api_base, path, id)))
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

async fn delete_record(path: &str, id: u32) -> Result<(), String> {
    let api_base = get_api_base();

    let response = authorize(Request::delete(&format!("{}/{}/{}", api_base, path, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

// ============ Contractors ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct ContractorPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_entity_id: Option<u32>,
}

pub async fn fetch_contractors() -> Result<Vec<Contractor>, String> {
    let result: ContractorListResponse = fetch_list("contractors").await?;
    Ok(result.contractors)
}

pub async fn create_contractor(payload: &ContractorPayload) -> Result<Contractor, String> {
    create_record("contractors", payload).await
}

pub async fn update_contractor(id: u32, payload: &ContractorPayload) -> Result<Contractor, String> {
    update_record("contractors", id, payload).await
}

pub async fn delete_contractor(id: u32) -> Result<(), String> {
    delete_record("contractors", id).await
}

// ============ Legal entities ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct LegalEntityPayload {
    pub name: String,
    pub tax_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

pub async fn fetch_legal_entities() -> Result<Vec<LegalEntity>, String> {
    let result: LegalEntityListResponse = fetch_list("legal-entities").await?;
    Ok(result.legal_entities)
}

pub async fn create_legal_entity(payload: &LegalEntityPayload) -> Result<LegalEntity, String> {
    create_record("legal-entities", payload).await
}

pub async fn update_legal_entity(id: u32, payload: &LegalEntityPayload) -> Result<LegalEntity, String> {
    update_record("legal-entities", id, payload).await
}

pub async fn delete_legal_entity(id: u32) -> Result<(), String> {
    delete_record("legal-entities", id).await
}

// ============ Departments ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct DepartmentPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
}

pub async fn fetch_departments() -> Result<Vec<Department>, String> {
    let result: DepartmentListResponse = fetch_list("departments").await?;
    Ok(result.departments)
}

pub async fn create_department(payload: &DepartmentPayload) -> Result<Department, String> {
    create_record("departments", payload).await
}

pub async fn update_department(id: u32, payload: &DepartmentPayload) -> Result<Department, String> {
    update_record("departments", id, payload).await
}

pub async fn delete_department(id: u32) -> Result<(), String> {
    delete_record("departments", id).await
}

// ============ Categories ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let result: CategoryListResponse = fetch_list("categories").await?;
    Ok(result.categories)
}

pub async fn create_category(payload: &CategoryPayload) -> Result<Category, String> {
    create_record("categories", payload).await
}

pub async fn update_category(id: u32, payload: &CategoryPayload) -> Result<Category, String> {
    update_record("categories", id, payload).await
}

pub async fn delete_category(id: u32) -> Result<(), String> {
    delete_record("categories", id).await
}
