use core::marker::PhantomData;

use crate::frame::Frame;
use crate::signal::Signal;

/// A [`Signal`] that yields [`Frame`]s by calling a closure for each iteration.
/// This closure should return [`Option<Frame>`].
pub struct FromFn<F, G>(pub(super) G, pub(super) PhantomData<F>)
where
    F: Frame,
    G: FnMut() -> Option<F>;

impl<F, G> Signal for FromFn<F, G>
where
    F: Frame,
    G: FnMut() -> Option<F>,
{
    type Frame = F;

    #[inline]
    fn next(&mut self) -> Option<Self::Frame> {
        (self.0)()
    }
}

/// A [`Signal`] that is powered by an underlying [`Iterator`] that yields
/// [`Frame`]s, e.g. a recording read back from disk.
pub struct FromFrames<I>(pub(super) I)
where
    I: Iterator,
    I::Item: Frame;

impl<I> Signal for FromFrames<I>
where
    I: Iterator,
    I::Item: Frame,
{
    type Frame = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Frame> {
        self.0.next()
    }
}
