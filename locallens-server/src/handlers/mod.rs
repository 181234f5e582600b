//! HTTP request handlers
//!
//! This module contains all the request handlers for the API endpoints.

pub mod analyze;
pub mod health;
pub mod history;

pub use crate::state::AppState;
pub use analyze::{analyze_handler, AnalyzeResponse};
pub use health::{health, ready, HealthResponse, ReadyResponse};
pub use history::history_view_handler;
