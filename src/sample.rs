//! Point samplers over the unit square
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

/// Draws points uniformly from the unit square `[0, 1)²` and tests them
/// against the arc-membership formula `x² + y² <= r`.
///
/// The radius enters the comparison directly, not squared, so the test is
/// only area-correct for `r = 1`; it is kept as the ported membership
/// formula. For the geometrically correct test see [`DiscSampler`].
///
/// # Example
///
/// ```
/// use circlemc::sample::ArcSampler;
///
/// let sampler = ArcSampler::new(1.0).unwrap();
/// let mut rng = rand::thread_rng();
///
/// let hits = (0..1000).filter(|_| sampler.draw(&mut rng)).count();
/// assert!(hits <= 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ArcSampler {
    radius: f64,
}

/// Draws points uniformly from the unit square `[0, 1)²` and tests them
/// against the disc-membership formula `x² + y² <= r²`.
///
/// Unlike [`ArcSampler`] this squares the radius, so for `r` in `(0, 1]`
/// the hit fraction scaled by four estimates the true circle area `πr²`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct DiscSampler {
    radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum SamplerError {
    /// radius is less than or equal to zero
    RadiusTooLow { radius: f64 },
    /// radius is infinite or NaN
    RadiusNotFinite { radius: f64 },
}

fn validate_radius(radius: f64) -> Result<f64, SamplerError> {
    if !radius.is_finite() {
        Err(SamplerError::RadiusNotFinite { radius })
    } else if radius <= 0.0 {
        Err(SamplerError::RadiusTooLow { radius })
    } else {
        Ok(radius)
    }
}

impl ArcSampler {
    /// Create a new sampler with the given radius
    #[inline]
    pub fn new(radius: f64) -> Result<Self, SamplerError> {
        validate_radius(radius).map(ArcSampler::new_unchecked)
    }

    /// Creates a new ArcSampler without checking whether the radius is valid
    #[inline]
    pub fn new_unchecked(radius: f64) -> Self {
        ArcSampler { radius }
    }

    /// Get the radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Draw one point from the unit square and return whether it lies
    /// inside the arc
    #[inline]
    pub fn draw<R: Rng>(&self, rng: &mut R) -> bool {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        x * x + y * y <= self.radius
    }
}

impl DiscSampler {
    /// Create a new sampler with the given radius
    #[inline]
    pub fn new(radius: f64) -> Result<Self, SamplerError> {
        validate_radius(radius).map(DiscSampler::new_unchecked)
    }

    /// Creates a new DiscSampler without checking whether the radius is
    /// valid
    #[inline]
    pub fn new_unchecked(radius: f64) -> Self {
        DiscSampler { radius }
    }

    /// Get the radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Draw one point from the unit square and return whether it lies
    /// inside the disc
    #[inline]
    pub fn draw<R: Rng>(&self, rng: &mut R) -> bool {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        x * x + y * y <= self.radius * self.radius
    }
}

impl std::error::Error for SamplerError {}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiusTooLow { radius } => {
                write!(f, "radius ({}) must be greater than zero", radius)
            }
            Self::RadiusNotFinite { radius } => {
                write!(f, "non-finite radius: {}", radius)
            }
        }
    }
}
