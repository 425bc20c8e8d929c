//! Circle-area estimators
//!
//! One estimate, three execution strategies. Each draws points in the unit
//! square with an [`ArcSampler`](crate::sample::ArcSampler) and returns
//! `(hits / samples) * 4`; they differ only in how the sampling workload is
//! scheduled and aggregated. All three treat `samples == 0` as a degenerate
//! input and return `0.0` without drawing.
mod pool;
mod scatter;
mod sequential;

pub use pool::{
    estimate_area_concurrent, estimate_area_concurrent_with_workers,
};
pub use scatter::estimate_area_parallel;
pub use sequential::{estimate_area, estimate_area_with_rng};
