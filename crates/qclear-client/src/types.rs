//! Wire types for the parts of the Qdrant REST API that qclear reads.

use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ServerInfo {
    /// Returns `true` if the title identifies the server as Qdrant.
    pub fn is_qdrant(&self) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| title.to_lowercase().contains("qdrant"))
    }
}

/// Body of `GET /collections`. Missing keys decode as an empty list.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CollectionsResponse {
    #[serde(default)]
    pub result: CollectionsResult,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CollectionsResult {
    #[serde(default)]
    pub collections: Vec<CollectionDescription>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionDescription {
    pub name: String,
}

impl CollectionsResponse {
    pub fn into_names(self) -> Vec<String> {
        self.result
            .collections
            .into_iter()
            .map(|c| c.name)
            .collect()
    }
}

/// Summary of one collection taken from `GET /collections/{name}`.
///
/// The default value (no points, unknown vector size) stands in for a
/// collection whose details could not be fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionInfo {
    /// Number of stored points.
    pub points_count: u64,
    /// Dimensionality of the collection's unnamed vector, if reported.
    pub vector_size: Option<u64>,
    /// The full `result` object as returned by the server.
    pub raw: Value,
}

impl CollectionInfo {
    /// Builds the summary from the `result` object of the response.
    ///
    /// Absent or non-numeric fields fall back to zero points and an
    /// unknown vector size.
    pub fn from_result(result: Value) -> Self {
        let points_count = result
            .get("points_count")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        let vector_size = result
            .pointer("/config/params/vectors/size")
            .and_then(Value::as_u64);
        Self {
            points_count,
            vector_size,
            raw: result,
        }
    }

    /// Vector size for display: the number, or `unknown`.
    pub fn vector_size_label(&self) -> String {
        match self.vector_size {
            Some(size) => size.to_string(),
            None => "unknown".to_string(),
        }
    }
}
