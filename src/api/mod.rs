//! HTTP API module for the Fleet Billing Engine.
//!
//! This module provides the REST endpoints for aggregating tripsheets and
//! calculating vehicle billing and driver salary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BillingRequest, MAX_REQUEST_AMOUNT, SalaryRequest, SummaryRequest};
pub use response::{ApiError, BillingResponse, SalaryResponse};
pub use state::AppState;
