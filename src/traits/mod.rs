/// Remote analysis backend.
pub mod analysis_service;
/// Persistent analysis history.
pub mod cache_store;
