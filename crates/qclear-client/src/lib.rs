//! Qdrant REST client and clear-all workflow.
//!
//! [`api::QdrantApi`] is the seam to the server, implemented over blocking
//! HTTP by [`api::HttpApi`]. [`cleaner::Cleaner`] drives the workflow:
//! verify the server, list and describe collections, confirm, then delete
//! them one at a time and report a [`summary::RunSummary`].

pub mod api;
pub mod cleaner;
pub mod error;
pub mod summary;
pub mod types;

pub use api::{HttpApi, QdrantApi};
pub use cleaner::{CONFIRMATION_PHRASE, Cleaner};
pub use error::{ApiError, ClearError};
pub use summary::{RunOutcome, RunSummary};
pub use types::{CollectionInfo, ServerInfo};
