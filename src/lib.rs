//! Monte Carlo estimation of the area of a circle.
//!
//! Random points are drawn in the unit square `[0, 1)²`; the fraction that
//! lands inside a quarter-circle arc, scaled by four, approximates the area
//! of the full circle. The same estimate is implemented under three
//! execution strategies with identical statistical semantics:
//!
//! - [`estimate_area`](crate::estimate::estimate_area): a single-threaded
//!   sampling loop.
//! - [`estimate_area_parallel`](crate::estimate::estimate_area_parallel):
//!   scatter/gather with one task per sample.
//! - [`estimate_area_concurrent`](crate::estimate::estimate_area_concurrent):
//!   a worker pool with one chunk of samples per logical core.
//!
//! # Example
//!
//! ```
//! use circlemc::prelude::*;
//! use std::f64::consts::PI;
//!
//! let area = estimate_area(1.0, 1_000_000);
//! assert!((area - PI).abs() < 0.05);
//! ```
pub mod estimate;
pub mod prelude;
pub mod sample;
