use std::fmt;

/// Errors raised while configuring scans or processing produced values.
///
/// Configuration errors are raised synchronously at construction time, never
/// discovered lazily during iteration. A successfully constructed scan is
/// safe to iterate any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// Constructor parameters describe an impossible scan.
    InvalidConfiguration(String),
    /// A processed value fell outside the configured global bounds.
    OutOfRange { value: f64, min: f64, max: f64 },
}

impl ScanError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ScanError::InvalidConfiguration(message.into())
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InvalidConfiguration(message) => {
                write!(f, "Invalid scan configuration: {message}")
            }
            ScanError::OutOfRange { value, min, max } => {
                write!(f, "Value {value} is outside the allowed range [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for ScanError {}
