mod dynamic;
mod fixed;

pub use self::dynamic::Dynamic;
pub use self::fixed::Fixed;

use core::fmt::Debug;

use crate::sample::Sample;

/// One multi-channel sample: a reading for each channel taken at the same
/// instant.
pub trait Frame: Clone + PartialEq + Debug {
    type Sample: Sample;

    /// Builds a frame of `channels` channels by calling `f` with each channel
    /// index in turn.
    ///
    /// Returns [`None`] if this frame type cannot hold `channels` channels.
    fn from_fn<G>(channels: usize, f: G) -> Option<Self>
    where
        G: FnMut(usize) -> Self::Sample;

    /// A frame of `channels` channels, each at [`Sample::EQUILIBRIUM`].
    fn equil(channels: usize) -> Option<Self> {
        Self::from_fn(channels, |_| Self::Sample::EQUILIBRIUM)
    }

    fn as_slice(&self) -> &[Self::Sample];

    fn as_mut_slice(&mut self) -> &mut [Self::Sample];

    fn get(&self, channel: usize) -> Option<&Self::Sample> {
        self.as_slice().get(channel)
    }

    fn get_mut(&mut self, channel: usize) -> Option<&mut Self::Sample> {
        self.as_mut_slice().get_mut(channel)
    }

    /// The number of channels in this frame.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
