#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a symbolic distribution (or another engine value) is
    /// constructed with parameters outside its valid domain.
    #[error("invalid parameters for {what}: {reason}")]
    InvalidParameters {
        /// What was being constructed (family or value name).
        what: &'static str,
        /// Why the parameters were rejected.
        reason: String,
    },

    /// Returned when a sample set is too small for the requested operation.
    #[error("insufficient samples: got {got}, need at least {required}")]
    InsufficientSamples {
        /// The number of samples available.
        got: usize,
        /// The minimum number of samples the operation requires.
        required: usize,
    },

    /// Returned when a distribution has no finite discretization under the
    /// given point budget (undefined or non-normalizable density).
    #[error("unrepresentable distribution: {0}")]
    Unrepresentable(String),

    /// Returned when mixture weights are empty, non-finite, negative, or
    /// sum to a value that is not strictly positive.
    #[error("invalid mixture weights: {0}")]
    InvalidWeights(String),

    /// Returned when an operation's result would leave its valid domain
    /// (division by a zero-spanning support, logarithm of a non-positive
    /// support, truncation that removes all mass, and similar).
    #[error("domain error: {0}")]
    Domain(String),

    /// Returned when a higher-level operation (mixture, arithmetic,
    /// scoring) fails because one of its operands could not be converted.
    #[error("conversion failed: {0}")]
    Conversion(#[source] Box<Error>),
}

impl Error {
    /// Wrap a conversion-layer failure encountered inside a higher-level
    /// operation. Already-wrapped failures pass through unchanged so that
    /// nested operations report a single conversion layer.
    #[must_use]
    pub(crate) fn into_conversion(self) -> Self {
        match self {
            Error::Conversion(_) => self,
            other => Error::Conversion(Box::new(other)),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
