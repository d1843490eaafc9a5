//! Remote Store Client
//!
//! HTTP binding to the hosted `menu_items` table, speaking PostgREST
//! conventions. Constructed once at startup and injected via context.

use reqwest::Response;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::models::MenuItem;

const TABLE: &str = "menu_items";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Editable fields the admin form submits for a persisted row
#[derive(Serialize)]
pub struct ItemPatch<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub category: &'a str,
}

#[derive(Serialize)]
struct AvailabilityPatch {
    available: bool,
}

/// Shared handle to the remote store
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    table_url: String,
    anon_key: String,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            table_url: format!("{}/rest/v1/{}", config.url.trim_end_matches('/'), TABLE),
            anon_key: config.anon_key.clone(),
        }
    }

    /// All rows flagged available, ordered by name (menu view load)
    pub async fn fetch_available(&self) -> Result<Vec<MenuItem>, StoreError> {
        let response = self
            .http
            .get(&self.table_url)
            .query(&[
                ("select", "*"),
                ("available", "eq.true"),
                ("order", "name.asc"),
            ])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;
        rows(response).await
    }

    /// All rows ordered by category then name (admin view load)
    pub async fn fetch_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        let response = self
            .http
            .get(&self.table_url)
            .query(&[("select", "*"), ("order", "category.asc,name.asc")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;
        rows(response).await
    }

    /// Flip the `available` flag on one row
    pub async fn set_availability(&self, id: &str, available: bool) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(&self.table_url)
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(&AvailabilityPatch { available })
            .send()
            .await?;
        accepted(response).await
    }

    /// Update the editable fields of one row
    pub async fn update_item(&self, id: &str, patch: &ItemPatch<'_>) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(&self.table_url)
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(patch)
            .send()
            .await?;
        accepted(response).await
    }

    /// Insert a draft, asking the store to return the created row(s)
    pub async fn insert_item(&self, draft: &MenuItem) -> Result<Vec<MenuItem>, StoreError> {
        let response = self
            .http
            .post(&self.table_url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(&[draft])
            .send()
            .await?;
        rows(response).await
    }
}

async fn rows(response: Response) -> Result<Vec<MenuItem>, StoreError> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }
    Ok(response.json().await?)
}

async fn accepted(response: Response) -> Result<(), StoreError> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }
    Ok(())
}

async fn rejection(response: Response) -> StoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    StoreError::Rejected {
        status,
        message: error_message(status, &body),
    }
}

/// Pull the human-readable message out of a PostgREST error body,
/// falling back to the raw body text.
fn error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => format!("status {}", status),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_store_body() {
        let body = r#"{"message":"duplicate key value violates unique constraint"}"#;
        assert_eq!(
            error_message(409, body),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message(500, "upstream timed out"), "upstream timed out");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(401, ""), "status 401");
    }
}
