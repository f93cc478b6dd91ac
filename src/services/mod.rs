/// JSON-file history.
pub mod file_cache_store;
/// HTTP client for the analysis backend.
pub mod http_analysis_service;
/// In-memory history.
pub mod memory_cache_store;
