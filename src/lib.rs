//! Multi-channel IIR filtering for continuously sampled signals such as EEG.
//!
//! A [`Filter`] holds a fixed set of coefficients and turns windows of raw
//! [`Frame`]s into filtered frames, one channel at a time. Keeping the sample
//! history is up to the caller; [`History`] and [`FilterStream`] do it for the
//! common case of filtering one signal from start to end.
//!
//! ```
//! use eegfilt::frame::Dynamic;
//! use eegfilt::{Filter, FilterStream};
//!
//! let filter: Filter = Filter::new(220.0, "bandpass").unwrap();
//! let mut stream = FilterStream::new(&filter, 4).unwrap();
//!
//! let out: Dynamic<f64> = stream.process(Dynamic::from([1.0, 0.5, 0.0, -1.0])).unwrap();
//! assert_eq!(out.into_vec().len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod frame;
pub mod history;
pub mod sample;
pub mod signal;

pub use config::{FilterConfig, FilterKind};
pub use error::{Error, Result};
pub use filter::Filter;
pub use frame::Frame;
pub use history::History;
pub use sample::Sample;
pub use signal::{FilterStream, Signal};
