//! The IIR filter engine.

use crate::config::FilterConfig;
use crate::error::{Error, Result, Window};
use crate::frame::Frame;
use crate::sample::Sample;

/// Coefficients converted to the sample type a [`Filter`] runs in.
#[derive(Clone, Debug, PartialEq)]
struct Coefficients<S: Sample> {
    // Feed-forward, applied to current and past inputs.
    b: Box<[S]>,
    // Feedback, applied to past outputs. `a[0]` is the normalizing divisor.
    a: Box<[S]>,
}

/// A direct-form IIR filter over multi-channel frames.
///
/// A `Filter` is immutable and keeps no per-signal state: each call to
/// [`Filter::transform`] is a pure function of the coefficients and the two
/// history windows the caller passes in. One instance can therefore be shared
/// between any number of signals and threads, as long as each signal owns
/// its own histories (see [`FilterStream`]).
///
/// ```
/// use eegfilt::frame::Fixed;
/// use eegfilt::Filter;
///
/// let filter: Filter = Filter::new(220.0, "bandpass").unwrap();
/// assert_eq!((filter.order_of_b(), filter.order_of_a()), (6, 6));
///
/// let mut x = vec![Fixed::from([0.0f64, 0.0]); 6];
/// let y = vec![Fixed::from([0.0f64, 0.0]); 6];
/// x[5] = Fixed::from([1.0, 2.0]);
///
/// let out = filter.transform(&x, &y).unwrap();
/// assert_eq!(out.into_array(), [0.009857084769866575, 0.01971416953973315]);
/// ```
///
/// [`FilterStream`]: crate::signal::FilterStream
#[derive(Clone, Debug, PartialEq)]
pub struct Filter<S: Sample = f64> {
    config: FilterConfig,
    coeffs: Coefficients<S>,
}

impl<S: Sample> Filter<S> {
    /// Builds the built-in filter named by `filter_type`.
    ///
    /// `sampling_frequency` is recorded in the configuration but does not
    /// influence the coefficients.
    pub fn new(sampling_frequency: f64, filter_type: &str) -> Result<Self> {
        Self::from_config(FilterConfig::resolve(sampling_frequency, filter_type)?)
    }

    pub fn from_config(config: FilterConfig) -> Result<Self> {
        let coeffs = Coefficients {
            b: convert("B", config.b())?,
            a: convert("A", config.a())?,
        };

        // A leading feedback coefficient can still underflow to zero when
        // narrowing to the sample type.
        if coeffs.a[0] == S::zero() {
            return Err(Error::ZeroLeadingFeedback);
        }

        log::debug!(
            "Configured {:?} filter (version {}, nB = {}, nA = {}, fs = {})",
            config.name(),
            config.version(),
            coeffs.b.len(),
            coeffs.a.len(),
            config.sampling_frequency(),
        );

        Ok(Self { config, coeffs })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of feed-forward coefficients, i.e. the minimum length of the
    /// input history.
    pub fn order_of_b(&self) -> usize {
        self.coeffs.b.len()
    }

    /// Number of feedback coefficients, i.e. the minimum length of the output
    /// history.
    pub fn order_of_a(&self) -> usize {
        self.coeffs.a.len()
    }

    /// Computes the filtered frame for the newest entry of `inputs`.
    ///
    /// Both windows are ordered oldest first and are aligned in time: entry
    /// `len - 1 - i` of each refers to the instant `i` samples before the one
    /// being computed. The newest entry of `outputs` therefore stands for the
    /// value being computed and is never read. Per channel `c`:
    ///
    /// ```text
    /// y[c] = (b[0]·x[n][c] + Σ b[i]·x[n-i][c] - Σ a[i]·y[n-i][c]) / a[0]
    /// ```
    ///
    /// Only the newest `order_of_b()` inputs and `order_of_a()` outputs are
    /// used; longer windows are allowed. Every frame in those ranges, the
    /// unread newest output included, must have the same channel count as the
    /// newest input.
    pub fn transform<F>(&self, inputs: &[F], outputs: &[F]) -> Result<F>
    where
        F: Frame<Sample = S>,
    {
        let b = &self.coeffs.b;
        let a = &self.coeffs.a;

        let x = newest(Window::Input, inputs, b.len())?;
        let y = newest(Window::Output, outputs, a.len())?;

        let channels = x[x.len() - 1].len();
        if let Some(f) = x.iter().chain(y).find(|f| f.len() != channels) {
            return Err(Error::ChannelMismatch {
                expected: channels,
                actual: f.len(),
            });
        }

        let taps = b.len().max(a.len());

        let mut out = x[x.len() - 1].clone();
        for (c, s) in out.as_mut_slice().iter_mut().enumerate() {
            let xs = |i: usize| x[x.len() - 1 - i].as_slice()[c];
            let ys = |i: usize| y[y.len() - 1 - i].as_slice()[c];

            let mut acc = b[0] * xs(0);
            for i in 1..taps {
                let ff = b.get(i).map_or(S::zero(), |&bi| bi * xs(i));
                let fb = a.get(i).map_or(S::zero(), |&ai| ai * ys(i));
                acc = acc + (ff - fb);
            }

            *s = acc / a[0];
        }

        Ok(out)
    }
}

/// The newest `required` entries of `window`.
fn newest<F>(window: Window, frames: &[F], required: usize) -> Result<&[F]> {
    frames
        .len()
        .checked_sub(required)
        .map(|start| &frames[start..])
        .ok_or(Error::HistoryTooShort {
            window,
            required,
            actual: frames.len(),
        })
}

fn convert<S: Sample>(table: &'static str, coeffs: &[f64]) -> Result<Box<[S]>> {
    coeffs
        .iter()
        .enumerate()
        .map(|(index, &c)| {
            S::from_coefficient(c).ok_or(Error::NonFiniteCoefficient { table, index })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::config::tables;
    use crate::frame::{Dynamic, Fixed};

    fn bandpass() -> Filter {
        Filter::new(220.0, "bandpass").unwrap()
    }

    fn zeros<const N: usize>(len: usize) -> Vec<Fixed<f64, N>> {
        vec![Fixed::default(); len]
    }

    #[test]
    fn orders() {
        let filter = bandpass();
        assert_eq!(filter.order_of_b(), tables::BANDPASS.b.len());
        assert_eq!(filter.order_of_a(), tables::BANDPASS.a.len());
        assert_eq!((filter.order_of_b(), filter.order_of_a()), (6, 6));

        let filter: Filter = Filter::new(220.0, "butterworth").unwrap();
        assert_eq!((filter.order_of_b(), filter.order_of_a()), (11, 11));
    }

    #[test]
    fn unrecognized_and_unavailable() {
        assert_eq!(
            Filter::<f64>::new(220.0, "notch"),
            Err(Error::UnrecognizedFilter("notch".into()))
        );
        assert!(matches!(
            Filter::<f64>::new(220.0, "alpha"),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn impulse() {
        let filter = bandpass();

        let mut x = zeros::<3>(6);
        x[5] = Fixed::from([1.0, 1.0, 1.0]);
        let y = zeros::<3>(6);

        let out = filter.transform(&x, &y).unwrap();
        let expected = tables::BANDPASS.b[0] / tables::BANDPASS.a[0];
        assert_eq!(out.into_array(), [expected; 3]);
    }

    #[test]
    fn zero_signal() {
        let filter = bandpass();
        let out = filter.transform(&zeros::<4>(6), &zeros::<4>(6)).unwrap();
        assert_eq!(out, Fixed::default());
    }

    #[test]
    fn newest_output_is_not_read() {
        let filter = bandpass();

        let x = zeros::<1>(6);
        let mut y = zeros::<1>(6);
        y[5] = Fixed::from([1.0e6]);

        assert_eq!(filter.transform(&x, &y).unwrap().into_array(), [0.0]);

        y[4] = Fixed::from([1.0]);
        assert_eq!(
            filter.transform(&x, &y).unwrap().into_array(),
            [-tables::BANDPASS.a[1]]
        );
    }

    #[test]
    fn longer_windows_use_newest_entries() {
        let filter = bandpass();

        let mut x = zeros::<1>(10);
        // Older than the 6-tap window.
        x[0] = Fixed::from([100.0]);
        x[9] = Fixed::from([1.0]);
        let y = zeros::<1>(8);

        assert_eq!(
            filter.transform(&x, &y).unwrap().into_array(),
            [tables::BANDPASS.b[0]]
        );
    }

    #[test]
    fn normalizes_by_leading_feedback() {
        let config = FilterConfig::new("half", 1.0, vec![1.0, 1.0], vec![2.0, 0.5]).unwrap();
        let filter: Filter = Filter::from_config(config).unwrap();

        let x = vec![Fixed::from([3.0]), Fixed::from([5.0])];
        let y = vec![Fixed::from([4.0]), Fixed::from([0.0])];

        // (1·5 + 1·3 - 0.5·4) / 2
        assert_eq!(filter.transform(&x, &y).unwrap().into_array(), [3.0]);
    }

    #[test]
    fn unequal_orders() {
        // FIR: no feedback beyond the normalizer.
        let config = FilterConfig::new("avg", 1.0, vec![0.5, 0.5], vec![1.0]).unwrap();
        let filter: Filter = Filter::from_config(config).unwrap();
        assert_eq!((filter.order_of_b(), filter.order_of_a()), (2, 1));

        let x = vec![Fixed::from([2.0]), Fixed::from([4.0])];
        let y = vec![Fixed::from([0.0])];
        assert_eq!(filter.transform(&x, &y).unwrap().into_array(), [3.0]);

        // One-pole smoother: y[n] = x[n] + 0.5·y[n-1].
        let config = FilterConfig::new("pole", 1.0, vec![1.0], vec![1.0, -0.5]).unwrap();
        let filter: Filter = Filter::from_config(config).unwrap();

        let x = vec![Fixed::from([1.0])];
        let y = vec![Fixed::from([8.0]), Fixed::from([0.0])];
        assert_eq!(filter.transform(&x, &y).unwrap().into_array(), [5.0]);
    }

    #[test]
    fn history_too_short() {
        let filter = bandpass();

        assert_eq!(
            filter.transform(&zeros::<2>(5), &zeros::<2>(6)),
            Err(Error::HistoryTooShort {
                window: Window::Input,
                required: 6,
                actual: 5,
            })
        );
        assert_eq!(
            filter.transform(&zeros::<2>(6), &zeros::<2>(0)),
            Err(Error::HistoryTooShort {
                window: Window::Output,
                required: 6,
                actual: 0,
            })
        );
    }

    #[test]
    fn channel_mismatch() {
        let filter = bandpass();

        let mut x = vec![Dynamic::from([0.0f64, 0.0]); 6];
        let y = vec![Dynamic::from([0.0f64, 0.0]); 6];

        x[2] = Dynamic::from([0.0]);
        assert_eq!(
            filter.transform(&x, &y),
            Err(Error::ChannelMismatch {
                expected: 2,
                actual: 1,
            })
        );

        let x = vec![Dynamic::from([0.0f64, 0.0]); 6];
        let mut y = y;
        y[5] = Dynamic::from([0.0, 0.0, 0.0]);
        assert_eq!(
            filter.transform(&x, &y),
            Err(Error::ChannelMismatch {
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn single_precision() {
        let filter: Filter<f32> = Filter::new(220.0, "bandpass").unwrap();

        let mut x = vec![Fixed::<f32, 1>::default(); 6];
        x[5] = Fixed::from([1.0]);
        let y = vec![Fixed::<f32, 1>::default(); 6];

        let out = filter.transform(&x, &y).unwrap().into_array();
        assert_relative_eq!(out[0], tables::BANDPASS.b[0] as f32);
    }

    #[test]
    fn shared_between_threads() {
        let filter = bandpass();

        let mut x = zeros::<2>(6);
        x[5] = Fixed::from([1.0, -1.0]);
        let y = zeros::<2>(6);
        let expected = filter.transform(&x, &y).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| filter.transform(&x, &y).unwrap()))
                .collect();

            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    fn history() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1000.0f64..1000.0, 6)
    }

    proptest! {
        #[test]
        fn deterministic(xs in history(), ys in history()) {
            let filter = bandpass();

            let x: Vec<Dynamic<f64>> = xs.iter().map(|&s| Dynamic::from([s, -s])).collect();
            let y: Vec<Dynamic<f64>> = ys.iter().map(|&s| Dynamic::from([s, 2.0 * s])).collect();

            prop_assert_eq!(filter.transform(&x, &y).unwrap(), filter.transform(&x, &y).unwrap());
        }

        #[test]
        fn channels_are_independent_and_linear(
            xs in history(),
            ys in history(),
            k in -10.0f64..10.0,
        ) {
            let filter = bandpass();

            let x: Vec<Fixed<f64, 2>> = xs.iter().map(|&s| Fixed::from([s, k * s])).collect();
            let y: Vec<Fixed<f64, 2>> = ys.iter().map(|&s| Fixed::from([s, k * s])).collect();

            let [c0, c1] = filter.transform(&x, &y).unwrap().into_array();
            assert_relative_eq!(c1, k * c0, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}
