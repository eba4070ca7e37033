//! Thin JSON client for the remote record-management service.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;

/// Shared HTTP plumbing for the remote repositories. Plain request/response;
/// a failed call surfaces to the caller unchanged, with no retry.
pub struct RemoteApi {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteApi {
    pub fn new(base_url: &str) -> Result<Self, StorageError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(StorageError::InvalidBaseUrl(format!(
                "'{base_url}' is not an http(s) URL"
            )));
        }
        Ok(RemoteApi {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StorageError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(path, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StorageError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StorageError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(path, &response)?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: Response,
    ) -> Result<T, StorageError> {
        Self::check_status(path, &response)?;
        Ok(response.json::<T>().await?)
    }

    fn check_status(path: &str, response: &Response) -> Result<(), StorageError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(StorageError::Rejected {
                status: status.as_u16(),
                message: format!("request to '{path}' failed"),
            });
        }
        Ok(())
    }
}
