//! tick-scale-rs: nice-number axis tick computation.
//!
//! This crate turns a raw data range and a desired approximate tick count
//! into round tick spacing ({1, 2, 5, 10} × 10^k), outward-expanded axis
//! bounds, and clean sequential tick positions for chart axes.

pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{TickScale, axis_tick_target_count, max_ticks_for_span};
pub use crate::error::{TickError, TickResult};
