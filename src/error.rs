use thiserror::Error;

use crate::config::FilterKind;

/// Which of the two history windows an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Window {
    Input,
    Output,
}

impl core::fmt::Display for Window {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Window::Input => f.write_str("input"),
            Window::Output => f.write_str("output"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("filter type not recognized: {0:?}")]
    UnrecognizedFilter(String),

    #[error("no coefficients are available for the {0} filter")]
    Unavailable(FilterKind),

    #[error("coefficient table {0:?} is empty")]
    EmptyCoefficients(&'static str),

    #[error("coefficient {table}[{index}] is not a finite value")]
    NonFiniteCoefficient { table: &'static str, index: usize },

    #[error("leading feedback coefficient A[0] must be non-zero")]
    ZeroLeadingFeedback,

    #[error("{window} history holds {actual} samples, at least {required} are required")]
    HistoryTooShort {
        window: Window,
        required: usize,
        actual: usize,
    },

    #[error("frame type cannot hold {0} channels")]
    UnsupportedChannelCount(usize),

    #[error("sample has {actual} channels, expected {expected}")]
    ChannelMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
