use crate::frame::Frame;

/// A fixed-capacity sliding window of [`Frame`]s, oldest first.
///
/// Pushing onto a full window evicts its oldest frame, so the newest frame is
/// always at the highest index. The window is kept contiguous so that it can be
/// handed to [`Filter::transform`] as a plain slice.
///
/// [`Filter::transform`]: crate::filter::Filter::transform
#[derive(Clone, Debug, PartialEq)]
pub struct History<F: Frame> {
    frames: Vec<F>,
    capacity: usize,
}

impl<F: Frame> History<F> {
    /// An empty window that holds up to `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// A full window, with every slot set to `frame`.
    pub fn primed(capacity: usize, frame: F) -> Self {
        Self {
            frames: vec![frame; capacity],
            capacity,
        }
    }

    /// Appends `frame` as the newest entry, returning the evicted oldest entry
    /// if the window was full.
    pub fn push(&mut self, frame: F) -> Option<F> {
        if self.capacity == 0 {
            return Some(frame);
        }

        let evicted = if self.frames.len() == self.capacity {
            // Cheap for the handful of taps a filter has.
            self.frames.rotate_left(1);
            self.frames.pop()
        } else {
            None
        };

        self.frames.push(frame);
        evicted
    }

    /// The newest frame, if any.
    pub fn newest(&self) -> Option<&F> {
        self.frames.last()
    }

    /// Mutable access to the newest frame, if any.
    pub fn newest_mut(&mut self) -> Option<&mut F> {
        self.frames.last_mut()
    }

    /// Sets every slot to `frame`, filling the window.
    pub fn fill(&mut self, frame: F) {
        self.frames.clear();
        self.frames.resize(self.capacity, frame);
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn as_slice(&self) -> &[F] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the window holds `capacity` frames.
    pub fn is_primed(&self) -> bool {
        self.frames.len() == self.capacity
    }
}
