//! Application state for the shift pay engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::HolidayCalendar;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded workplace configuration and the memoized holiday calendar.
#[derive(Clone)]
pub struct AppState {
    /// The loaded workplace configuration.
    config: Arc<ConfigLoader>,
    /// Holiday maps built so far, shared by every request.
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and an empty holiday calendar.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            calendar: Arc::new(HolidayCalendar::new()),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
