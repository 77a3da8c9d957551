use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::frame::Frame;
use crate::history::History;
use crate::signal::Signal;

/// Drives a [`Filter`] over one signal, sample by sample.
///
/// The stream owns the input and output [`History`] windows for its signal
/// and keeps them time-aligned, starting from zero initial conditions. The
/// filter itself is only borrowed, so many streams can share one filter.
#[derive(Clone, Debug)]
pub struct FilterStream<'a, F: Frame> {
    filter: &'a Filter<F::Sample>,
    inputs: History<F>,
    outputs: History<F>,
    equil: F,
}

impl<'a, F: Frame> FilterStream<'a, F> {
    pub fn new(filter: &'a Filter<F::Sample>, channels: usize) -> Result<Self> {
        let equil = F::equil(channels).ok_or(Error::UnsupportedChannelCount(channels))?;

        Ok(Self {
            filter,
            inputs: History::primed(filter.order_of_b(), equil.clone()),
            outputs: History::primed(filter.order_of_a(), equil.clone()),
            equil,
        })
    }

    pub fn filter(&self) -> &'a Filter<F::Sample> {
        self.filter
    }

    pub fn channels(&self) -> usize {
        self.equil.len()
    }

    /// Filters the next frame of the signal.
    ///
    /// A frame with the wrong channel count is rejected and leaves the stream
    /// untouched.
    pub fn process(&mut self, frame: F) -> Result<F> {
        if frame.len() != self.channels() {
            return Err(Error::ChannelMismatch {
                expected: self.channels(),
                actual: frame.len(),
            });
        }

        self.inputs.push(frame);
        // Slot for the value being computed, which the filter does not read.
        self.outputs.push(self.equil.clone());

        let y = self
            .filter
            .transform(self.inputs.as_slice(), self.outputs.as_slice())?;

        if let Some(slot) = self.outputs.newest_mut() {
            *slot = y.clone();
        }

        Ok(y)
    }

    /// Returns the stream to zero initial conditions.
    pub fn reset(&mut self) {
        self.inputs.fill(self.equil.clone());
        self.outputs.fill(self.equil.clone());
    }
}

/// A [`Signal`] adaptor that filters every frame; see [`Signal::filtered`].
pub struct Filtered<'a, S: Signal> {
    signal: S,
    filter: &'a Filter<<S::Frame as Frame>::Sample>,
    stream: Option<FilterStream<'a, S::Frame>>,
}

impl<'a, S: Signal> Filtered<'a, S> {
    pub(super) fn new(signal: S, filter: &'a Filter<<S::Frame as Frame>::Sample>) -> Self {
        Self {
            signal,
            filter,
            stream: None,
        }
    }
}

impl<'a, S: Signal> Iterator for Filtered<'a, S> {
    type Item = Result<S::Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.signal.next()?;

        let stream = match &mut self.stream {
            Some(stream) => stream,
            slot @ None => match FilterStream::new(self.filter, frame.len()) {
                Ok(stream) => slot.insert(stream),
                Err(err) => return Some(Err(err)),
            },
        };

        Some(stream.process(frame))
    }
}
