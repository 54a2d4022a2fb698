//! HTTP API module for the Shift Scheduling & Compensation Engine.
//!
//! This module provides the REST API endpoints for generating weekly
//! schedules and calculating compensation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculatePayRequest, GenerateScheduleRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
