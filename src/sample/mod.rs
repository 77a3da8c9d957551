use core::fmt::Debug;

use num_traits::{Float, NumCast};

/// A trait for the scalar readings that make up one channel of a [`Frame`].
///
/// Only floating-point types qualify: the filter recurrence is carried out
/// without saturation or clamping, so readings must be able to represent the
/// full (signed, unbounded) output range of the filter.
///
/// [`Frame`]: crate::frame::Frame
pub trait Sample: Float + Debug + Send + Sync + 'static {
    /// The equilibrium value for the signal that this sample type represents,
    /// i.e. the "zero amplitude" value.
    const EQUILIBRIUM: Self;

    /// Converts a coefficient from its stored `f64` representation.
    ///
    /// Returns [`None`] if the value cannot be represented by [`Self`].
    fn from_coefficient(c: f64) -> Option<Self> {
        <Self as NumCast>::from(c).filter(|s: &Self| s.is_finite())
    }
}

impl Sample for f32 {
    const EQUILIBRIUM: Self = 0.0;
}

impl Sample for f64 {
    const EQUILIBRIUM: Self = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coefficient() {
        assert_eq!(f64::from_coefficient(-1.7049690366758874), Some(-1.7049690366758874));
        assert_eq!(f32::from_coefficient(0.5), Some(0.5f32));

        // Overflows the narrower type.
        assert_eq!(f32::from_coefficient(1.0e300), None);
        assert_eq!(f64::from_coefficient(f64::NAN), None);
    }
}
