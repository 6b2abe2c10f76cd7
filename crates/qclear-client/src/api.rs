//! The request seam between the workflow and a Qdrant server.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use ureq::Agent;

use crate::error::ApiError;
use crate::types::{CollectionInfo, CollectionsResponse, ServerInfo};

/// The four requests qclear makes against a server.
pub trait QdrantApi {
    /// `GET /`
    fn server_info(&self) -> Result<ServerInfo, ApiError>;

    /// `GET /collections`, names in server order.
    fn list_collections(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /collections/{name}`
    fn collection_info(&self, name: &str) -> Result<CollectionInfo, ApiError>;

    /// `DELETE /collections/{name}`
    fn delete_collection(&self, name: &str) -> Result<(), ApiError>;
}

impl<T: QdrantApi + ?Sized> QdrantApi for &T {
    fn server_info(&self) -> Result<ServerInfo, ApiError> {
        (**self).server_info()
    }

    fn list_collections(&self) -> Result<Vec<String>, ApiError> {
        (**self).list_collections()
    }

    fn collection_info(&self, name: &str) -> Result<CollectionInfo, ApiError> {
        (**self).collection_info(name)
    }

    fn delete_collection(&self, name: &str) -> Result<(), ApiError> {
        (**self).delete_collection(name)
    }
}

/// Blocking HTTP implementation of [`QdrantApi`].
///
/// Non-success statuses surface as [`ApiError::Transport`]. Requests are
/// never retried.
#[derive(Clone)]
pub struct HttpApi {
    agent: Agent,
    base_url: String,
}

impl HttpApi {
    /// Creates a client for `base_url`. With `timeout == None` a request
    /// may wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let config = Agent::config_builder().timeout_global(timeout).build();
        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, name: &str) -> String {
        format!("{}/collections/{}", self.base_url, urlencoding::encode(name))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let mut response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| ApiError::transport(url, e))?;
        debug!(%url, status = %response.status(), "response");
        response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| ApiError::transport(url, e))
    }
}

impl QdrantApi for HttpApi {
    fn server_info(&self) -> Result<ServerInfo, ApiError> {
        self.get_json(&format!("{}/", self.base_url))
    }

    fn list_collections(&self) -> Result<Vec<String>, ApiError> {
        let response: CollectionsResponse =
            self.get_json(&format!("{}/collections", self.base_url))?;
        Ok(response.into_names())
    }

    fn collection_info(&self, name: &str) -> Result<CollectionInfo, ApiError> {
        let url = self.collection_url(name);
        let mut body: Value = self.get_json(&url)?;
        if !body.is_object() {
            return Err(ApiError::malformed(url, "expected a JSON object"));
        }
        let result = body
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null);
        Ok(CollectionInfo::from_result(result))
    }

    fn delete_collection(&self, name: &str) -> Result<(), ApiError> {
        let url = self.collection_url(name);
        debug!(%url, "DELETE");
        let response = self
            .agent
            .delete(&url)
            .call()
            .map_err(|e| ApiError::transport(&url, e))?;
        debug!(%url, status = %response.status(), "response");
        Ok(())
    }
}
