//! Sequential estimator: one thread, one counter
use rand::Rng;

use crate::sample::ArcSampler;

/// Estimate the area of a circle by drawing `samples` points sequentially.
///
/// Returns `(hits / samples) * 4`, the quarter-circle hit fraction scaled
/// to the full circle; with `radius = 1.0` the estimate converges on π.
/// `samples == 0` returns `0.0` without drawing.
///
/// # Example
///
/// ```
/// use circlemc::estimate::estimate_area;
/// use std::f64::consts::PI;
///
/// let area = estimate_area(1.0, 1_000_000);
/// assert!((area - PI).abs() < 0.05);
/// ```
pub fn estimate_area(radius: f64, samples: usize) -> f64 {
    estimate_area_with_rng(radius, samples, &mut rand::thread_rng())
}

/// Same as [`estimate_area`], drawing from a caller-supplied generator.
///
/// # Example
///
/// ```
/// use circlemc::estimate::estimate_area_with_rng;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(0xABCD);
/// let area = estimate_area_with_rng(1.0, 10_000, &mut rng);
/// assert!((0.0..=4.0).contains(&area));
/// ```
pub fn estimate_area_with_rng<R: Rng>(
    radius: f64,
    samples: usize,
    rng: &mut R,
) -> f64 {
    if samples == 0 {
        return 0.0;
    }

    let sampler = ArcSampler::new_unchecked(radius);
    let hits = (0..samples).filter(|_| sampler.draw(rng)).count();

    (hits as f64 / samples as f64) * 4.0
}
