use std::fmt;

use super::channel::QvChannel;

/// Errors raised while configuring a model or extracting read features.
///
/// None of these are transient; they signal a misconfigured model or an
/// alignment record that breaks the data contract, and are meant to be
/// propagated to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The free-parameter vector does not match the model's free-parameter count
    ParamCount {
        model: &'static str,
        expected: usize,
        got: usize,
    },
    /// A free-parameter index points outside the full parameter vector
    ParamIndex(usize),
    /// `from_name` was given a name outside the preset table
    UnknownParameterSet(String),
    /// A channel name that is not one of the five QV channels
    UnknownChannel(String),
    /// Mapped-read extraction on an alignment covering no reference bases
    NonPositiveSpan { start: i64, end: i64 },
    /// The record does not carry a channel the model requires
    MissingFeature(QvChannel),
    /// A pulse feature array is not aligned to the gapped read
    FeatureLength {
        channel: QvChannel,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::ParamCount {
                model,
                expected,
                got,
            } => write!(
                f,
                "{} takes {} free parameters, got {}",
                model, expected, got
            ),
            ModelError::ParamIndex(idx) => {
                write!(f, "Parameter index {} is out of range", idx)
            }
            ModelError::UnknownParameterSet(name) => {
                write!(f, "Unrecognized parameter set: {}", name)
            }
            ModelError::UnknownChannel(name) => write!(f, "Unrecognized QV channel: {}", name),
            ModelError::NonPositiveSpan { start, end } => write!(
                f,
                "Alignment [{}, {}) has a non-positive reference span",
                start, end
            ),
            ModelError::MissingFeature(channel) => {
                write!(f, "Alignment lacks the {} pulse feature", channel)
            }
            ModelError::FeatureLength {
                channel,
                expected,
                got,
            } => write!(
                f,
                "{} has {} values for an aligned read of length {}",
                channel, got, expected
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
