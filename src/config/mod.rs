//! Filter configurations: which coefficients a [`Filter`] runs with.
//!
//! [`Filter`]: crate::filter::Filter

pub mod tables;

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// The known filter types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterKind {
    /// Alpha band filter. No coefficients have been designed for it yet.
    Alpha,
    /// 2-36 Hz Butterworth bandpass designed for fs = 220 Hz.
    Butterworth,
    /// 2-36 Hz bandpass.
    Bandpass,
}

impl FilterKind {
    /// Resolves a filter type identifier.
    ///
    /// Identifiers are matched by substring, so e.g. `"eeg bandpass"` names
    /// [`FilterKind::Bandpass`]. Earlier variants take precedence.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        let kind = [Self::Alpha, Self::Butterworth, Self::Bandpass]
            .into_iter()
            .find(|k| identifier.contains(k.as_str()));

        kind.ok_or_else(|| {
            log::warn!("Filter type not recognized: {:?}", identifier);
            Error::UnrecognizedFilter(identifier.to_owned())
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Butterworth => "butterworth",
            Self::Bandpass => "bandpass",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_identifier(s)
    }
}

/// A validated, immutable set of filter coefficients.
///
/// `b` holds the feed-forward coefficients and `a` the feedback coefficients,
/// both starting at lag 0. `a[0]` is guaranteed non-zero.
///
/// The sampling frequency is recorded for reference only; it has no effect on
/// the coefficients or on filtered output.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFilterConfig"))]
pub struct FilterConfig {
    name: String,
    version: u32,
    sampling_frequency: f64,
    b: Vec<f64>,
    a: Vec<f64>,
}

impl FilterConfig {
    pub const DEFAULT_VERSION: u32 = 1;

    pub fn new(
        name: impl Into<String>,
        sampling_frequency: f64,
        b: Vec<f64>,
        a: Vec<f64>,
    ) -> Result<Self> {
        validate("B", &b)?;
        validate("A", &a)?;

        if a[0] == 0.0 {
            return Err(Error::ZeroLeadingFeedback);
        }

        Ok(Self {
            name: name.into(),
            version: Self::DEFAULT_VERSION,
            sampling_frequency,
            b,
            a,
        })
    }

    /// Resolves `identifier` to one of the built-in coefficient tables.
    ///
    /// ```
    /// use eegfilt::config::FilterConfig;
    ///
    /// let config = FilterConfig::resolve(220.0, "bandpass").unwrap();
    /// assert_eq!(config.b().len(), 6);
    /// assert!(FilterConfig::resolve(220.0, "alpha").is_err());
    /// assert!(FilterConfig::resolve(220.0, "notch").is_err());
    /// ```
    pub fn resolve(sampling_frequency: f64, identifier: &str) -> Result<Self> {
        let kind = FilterKind::from_identifier(identifier)?;
        Self::builtin(kind, sampling_frequency)
    }

    /// The built-in configuration for `kind`.
    pub fn builtin(kind: FilterKind, sampling_frequency: f64) -> Result<Self> {
        let table = tables::lookup(kind).ok_or(Error::Unavailable(kind))?;

        Ok(Self::new(kind.as_str(), sampling_frequency, table.b.to_vec(), table.a.to_vec())?
            .with_version(table.version))
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    /// Feed-forward coefficients.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Feedback coefficients.
    pub fn a(&self) -> &[f64] {
        &self.a
    }
}

fn validate(table: &'static str, coeffs: &[f64]) -> Result<()> {
    if coeffs.is_empty() {
        return Err(Error::EmptyCoefficients(table));
    }

    match coeffs.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(Error::NonFiniteCoefficient { table, index }),
        None => Ok(()),
    }
}

/// Unvalidated form of [`FilterConfig`], as found in data files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFilterConfig {
    name: String,
    #[serde(default = "default_version")]
    version: u32,
    sampling_frequency: f64,
    b: Vec<f64>,
    a: Vec<f64>,
}

#[cfg(feature = "serde")]
fn default_version() -> u32 {
    FilterConfig::DEFAULT_VERSION
}

#[cfg(feature = "serde")]
impl TryFrom<RawFilterConfig> for FilterConfig {
    type Error = Error;

    fn try_from(raw: RawFilterConfig) -> Result<Self> {
        Ok(Self::new(raw.name, raw.sampling_frequency, raw.b, raw.a)?.with_version(raw.version))
    }
}
