//! Shift pay engine for Japanese part-time work
//!
//! This crate generates the Japanese public holiday calendar for any year and
//! computes per-shift pay from workplace policy: wage history, tiered breaks,
//! paid padding around each shift, night and early-morning premiums, and a
//! busy-period bonus. Computed shifts can be aggregated over a fiscal period
//! and checked against the dependent-income limit.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
