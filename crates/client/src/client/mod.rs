//! HTTP client for the todo API.

use reqwest::{header, Response};
use todo_core::item::{Item, ItemList, UpdateItemRequest};

use crate::error::{ClientError, Result};

/// HTTP client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    client: reqwest::Client,
    base_url: String,
}

impl TodoClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (TODO_API_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TODO_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_url(&self, id: &str) -> String {
        self.url(&format!("/todo/{}", id))
    }

    /// List all items.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let response = self.client.get(self.url("/todo")).send().await?;
        let list: ItemList = self.handle_response(response).await?;
        Ok(list.items)
    }

    /// Get an item by ID along with its current ETag.
    pub async fn get_item(&self, id: &str) -> Result<(Item, Option<String>)> {
        let response = self.client.get(self.item_url(id)).send().await?;
        let etag = etag(&response);
        let item = self.handle_response(response).await?;
        Ok((item, etag))
    }

    /// Create a new item.
    pub async fn create_item(&self, text: &str) -> Result<Item> {
        let response = self
            .client
            .post(self.url("/todo"))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace an item, returning its new ETag.
    ///
    /// With `if_match` set the server rejects the write with
    /// [`ClientError::Conflict`] if the item changed since that ETag.
    pub async fn update_item(&self, item: &Item, if_match: Option<&str>) -> Result<Option<String>> {
        let mut request = self
            .client
            .put(self.item_url(&item.id))
            .json(&UpdateItemRequest::from(item.clone()));
        if let Some(tag) = if_match {
            request = request.header(header::IF_MATCH, tag);
        }

        let response = request.send().await?;
        let etag = etag(&response);
        self.handle_empty_response(response).await?;
        Ok(etag)
    }

    /// Delete an item by ID.
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        self.handle_empty_response(response).await
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from(response).await)
        }
    }

    /// Handle responses with no body expected.
    async fn handle_empty_response(&self, response: Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from(response).await)
        }
    }
}

fn etag(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::ETAG)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn error_from(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::from_status(status, message)
}
