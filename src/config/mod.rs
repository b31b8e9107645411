//! Configuration loading and management for the Shift Pay Engine.
//!
//! This module provides functionality to load workplace pay policies, shift
//! patterns and application settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/workplaces.yaml").unwrap();
//! println!("Workplaces: {:?}", config.workplace_ids());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppSettings, BreakRule, DEFAULT_LIMIT_INCOME, EngineConfig, FALLBACK_WAGE, ShiftPattern,
    WageHistoryEntry, WorkplaceConfig,
};
