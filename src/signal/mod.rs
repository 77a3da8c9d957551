mod sources;
mod stream;

pub use self::sources::{FromFn, FromFrames};
pub use self::stream::{FilterStream, Filtered};

use core::marker::PhantomData;

use crate::filter::Filter;
use crate::frame::Frame;

/// Types that yield a sequence of [`Frame`]s, representing a sampled
/// multi-channel signal.
///
/// This trait is inspired by the [`Iterator`] trait and has similar methods
/// and adaptors, but with a DSP-related focus.
pub trait Signal {
    /// The [`Frame`] type returned by this [`Signal`].
    type Frame: Frame;

    /// Advances [`Self`] and returns the next [`Frame`], or [`None`] if there
    /// are no more to yield.
    fn next(&mut self) -> Option<Self::Frame>;

    /// Borrows this [`Signal`] rather than consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Eagerly advances and discards `n` [`Frame`]s from [`Self`]. If there
    /// are fewer than `n` [`Frame`]s found, this will return `Err(x)`, where
    /// `x` is the number of [`Frame`]s actually advanced.
    fn advance_by(&mut self, n: usize) -> Result<(), usize> {
        for advanced in 0..n {
            self.next().ok_or(advanced)?;
        }

        Ok(())
    }

    /// Runs every [`Frame`] of this [`Signal`] through `filter`, yielding
    /// the filtered frames in order.
    ///
    /// The channel count is taken from the first frame; the filter starts from
    /// zero initial conditions.
    ///
    /// ```
    /// use eegfilt::frame::Fixed;
    /// use eegfilt::{signal, Filter, Signal};
    ///
    /// let filter: Filter = Filter::new(220.0, "bandpass").unwrap();
    /// let impulse = (0..8).map(|i| Fixed::from([if i == 0 { 1.0f64 } else { 0.0 }]));
    ///
    /// let out = signal::from_frames(impulse)
    ///     .filtered(&filter)
    ///     .collect::<Result<Vec<_>, _>>()
    ///     .unwrap();
    ///
    /// assert_eq!(out.len(), 8);
    /// assert_eq!(out[0].into_array(), [0.009857084769866575]);
    /// ```
    fn filtered(self, filter: &Filter<<Self::Frame as Frame>::Sample>) -> Filtered<'_, Self>
    where
        Self: Sized,
    {
        Filtered::new(self, filter)
    }
}

impl<S> Signal for &mut S
where
    S: Signal + ?Sized,
{
    type Frame = S::Frame;

    #[inline]
    fn next(&mut self) -> Option<Self::Frame> {
        (**self).next()
    }
}

/// Creates a [`Signal`] that yields the [`Frame`]s of an [`Iterator`].
pub fn from_frames<I>(frames: I) -> FromFrames<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Frame,
{
    FromFrames(frames.into_iter())
}

/// Creates a [`Signal`] that calls `f` for each [`Frame`], ending when it
/// returns [`None`].
pub fn from_fn<F, G>(f: G) -> FromFn<F, G>
where
    F: Frame,
    G: FnMut() -> Option<F>,
{
    FromFn(f, PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::frame::Dynamic;

    #[test]
    fn advance_by() {
        let mut signal = from_frames((0..10).map(|i| Dynamic::from([i as f64])));

        assert_eq!(signal.advance_by(5), Ok(()));
        assert_eq!(signal.next(), Some(Dynamic::from([5.0])));
        assert_eq!(signal.by_ref().next(), Some(Dynamic::from([6.0])));

        assert_eq!(signal.advance_by(5), Err(3));
        assert_eq!(signal.next(), None);
    }

    #[test]
    fn from_fn_ends_on_none() {
        let mut left = 3;
        let mut signal = from_fn(|| {
            left -= 1;
            (left >= 0).then(|| Dynamic::from([left as f32]))
        });

        assert_eq!(signal.next(), Some(Dynamic::from([2.0])));
        assert_eq!(signal.advance_by(2), Ok(()));
        assert_eq!(signal.next(), None);
    }
}
