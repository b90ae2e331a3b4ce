//! Access to the archive's search endpoints.

pub mod api;
pub mod config;
pub mod http_utils;

pub use http_utils::archive_client::ArchiveClient;
