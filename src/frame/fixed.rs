use crate::frame::Frame;
use crate::sample::Sample;

/// A [`Frame`] whose channel count `N` is known at compile time.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Fixed<S: Sample, const N: usize>([S; N]);

impl<S: Sample, const N: usize> Fixed<S, N> {
    pub fn into_array(self) -> [S; N] {
        self.0
    }
}

impl<S: Sample, const N: usize> Default for Fixed<S, N> {
    fn default() -> Self {
        Self([S::EQUILIBRIUM; N])
    }
}

impl<S: Sample, const N: usize> From<[S; N]> for Fixed<S, N> {
    fn from(value: [S; N]) -> Self {
        Self(value)
    }
}

impl<S: Sample, const N: usize> Frame for Fixed<S, N> {
    type Sample = S;

    fn from_fn<G>(channels: usize, f: G) -> Option<Self>
    where
        G: FnMut(usize) -> S,
    {
        (channels == N).then(|| Self(core::array::from_fn(f)))
    }

    fn as_slice(&self) -> &[S] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.0
    }

    fn len(&self) -> usize {
        N
    }
}

impl<S: Sample, const N: usize> IntoIterator for Fixed<S, N> {
    type Item = S;
    type IntoIter = core::array::IntoIter<S, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
