// src/infrastructure/directory.rs
//
// Typed HTTP client for the user/post/todo directory service.
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{DomainError, Post, Todo, User};

pub struct DirectoryClient {
    base_url: String,
    client: Client,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, DomainError> {
        self.get_json(&format!("{}/users", self.base_url)).await
    }

    pub async fn fetch_posts(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        self.get_json(&format!("{}/posts?userId={}", self.base_url, user_id))
            .await
    }

    pub async fn fetch_todos(&self, user_id: i64) -> Result<Vec<Todo>, DomainError> {
        self.get_json(&format!("{}/todos?userId={}", self.base_url, user_id))
            .await
    }

    pub async fn fetch_all_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.get_json(&format!("{}/posts", self.base_url)).await
    }

    pub async fn fetch_all_todos(&self) -> Result<Vec<Todo>, DomainError> {
        self.get_json(&format!("{}/todos", self.base_url)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DomainError> {
        debug!(url, "Fetching from directory service");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::FetchFailed(format!("Request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(DomainError::FetchFailed(format!("HTTP {}", resp.status())));
        }

        resp.json::<T>()
            .await
            .map_err(|e| DomainError::FetchFailed(format!("Invalid response: {e}")))
    }
}
