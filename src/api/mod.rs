//! HTTP API module for the shift pay engine.
//!
//! This module provides the REST endpoints for computing shift pay,
//! summarizing a fiscal period and looking up Japanese public holidays.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayQuery, SummaryRequest};
pub use response::{
    ApiError, ApiErrorResponse, HolidayCheckResponse, HolidayEntry, HolidayYearResponse,
    SummaryResponse,
};
pub use state::AppState;
