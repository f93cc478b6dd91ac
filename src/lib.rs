//! Client for an AI GitHub issue analysis backend.
//!
//! The [`RequestOrchestrator`](workers::request_orchestrator::RequestOrchestrator)
//! runs the analysis and developer-info flows and records every successful
//! analysis in a [`CacheStore`](traits::cache_store::CacheStore).

/// Configuration file handling and constants.
pub mod config;
/// State machines, CLI commands and session commands.
pub mod enums;
/// Error type shared by every layer.
pub mod errors;
/// Small helpers for serde defaults and file export.
pub mod helpers;
/// Terminal presentation: spinner and report printer.
pub mod logger;
/// Backend client and cache store implementations.
pub mod services;
/// Data carried between the backend, the cache and the terminal.
pub mod structs;
/// Seams for the backend and the history store.
pub mod traits;
/// Orchestration, CLI command dispatch and the interactive session.
pub mod workers;
