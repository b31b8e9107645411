//! Core data models for the Shift Pay Engine.
//!
//! This module contains the shift records that flow through the engine.

mod computed_shift;
pub mod hm_time;
mod shift;

pub use computed_shift::ComputedShift;
pub use shift::RawShiftEntry;
