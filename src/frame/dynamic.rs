use crate::frame::Frame;
use crate::sample::Sample;

/// A [`Frame`] whose channel count is only known at run time, e.g. one
/// reading per electrode of a headset discovered on connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Dynamic<S: Sample>(Box<[S]>);

impl<S: Sample> Dynamic<S> {
    pub fn into_boxed_slice(self) -> Box<[S]> {
        self.0
    }

    pub fn into_vec(self) -> Vec<S> {
        self.0.into_vec()
    }
}

impl<S: Sample> Default for Dynamic<S> {
    fn default() -> Self {
        Self(Box::new([]))
    }
}

impl<S: Sample> From<Vec<S>> for Dynamic<S> {
    fn from(value: Vec<S>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl<S: Sample> From<Box<[S]>> for Dynamic<S> {
    fn from(value: Box<[S]>) -> Self {
        Self(value)
    }
}

impl<S: Sample, const N: usize> From<[S; N]> for Dynamic<S> {
    fn from(value: [S; N]) -> Self {
        Self(Box::new(value))
    }
}

impl<S: Sample> FromIterator<S> for Dynamic<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<S: Sample> Frame for Dynamic<S> {
    type Sample = S;

    fn from_fn<G>(channels: usize, f: G) -> Option<Self>
    where
        G: FnMut(usize) -> S,
    {
        Some((0..channels).map(f).collect())
    }

    fn as_slice(&self) -> &[S] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.0
    }
}

impl<S: Sample> IntoIterator for Dynamic<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
