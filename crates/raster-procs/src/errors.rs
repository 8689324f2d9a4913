//! Errors possible during raster operations
use std::fmt::{Debug, Display, Formatter};

use raster_core::errors::BufferErrors;

/// Errors that may occur while executing an operation
pub enum OpsErrors {
    /// A gamma exponent was zero, negative or NaN
    InvalidGamma(f32),
    /// The buffer geometry was inconsistent
    Buffer(BufferErrors),
    /// Generic errors
    Generic(&'static str),
    /// Generic errors which have more context
    GenericString(String)
}

impl Display for OpsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGamma(value) => {
                writeln!(f, "gamma exponents must be positive, got {value}")
            }
            Self::Buffer(error) => {
                writeln!(f, "{error}")
            }
            Self::Generic(reason) => {
                writeln!(f, "{reason}")
            }
            Self::GenericString(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl Debug for OpsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for OpsErrors {}

impl From<BufferErrors> for OpsErrors {
    fn from(error: BufferErrors) -> Self {
        OpsErrors::Buffer(error)
    }
}

impl From<&'static str> for OpsErrors {
    fn from(reason: &'static str) -> Self {
        OpsErrors::Generic(reason)
    }
}

impl From<String> for OpsErrors {
    fn from(reason: String) -> Self {
        OpsErrors::GenericString(reason)
    }
}
