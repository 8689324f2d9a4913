//! Errors possible when constructing pixel buffers
use std::fmt::{Debug, Display, Formatter};

/// Errors returned when a buffer's stated geometry does not
/// match its backing allocation.
///
/// These are construction-time failures; a successfully constructed
/// [`PixelBuffer`](crate::buffer::PixelBuffer) is guaranteed to be
/// internally consistent and operators never re-validate it.
pub enum BufferErrors {
    /// Width or height was zero
    ZeroDimension(&'static str),
    /// The row stride cannot hold one row of packed pixels
    StrideTooSmall { stride: usize, min: usize },
    /// The backing byte region does not match `stride * height`
    SizeMismatch { expected: usize, found: usize }
}

impl Display for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension(dimension) => {
                writeln!(f, "{dimension} cannot be zero")
            }
            Self::StrideTooSmall { stride, min } => {
                writeln!(
                    f,
                    "stride {stride} is too small to hold a packed pixel row, minimum is {min}"
                )
            }
            Self::SizeMismatch { expected, found } => {
                writeln!(
                    f,
                    "buffer size mismatch, expected {expected} bytes but found {found}"
                )
            }
        }
    }
}

impl Debug for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for BufferErrors {}
