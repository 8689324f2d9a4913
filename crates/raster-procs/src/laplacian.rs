//! Laplacian edge detector
use raster_core::buffer::PixelBuffer;

use crate::convolve::{Convolve, Kernel3x3};
use crate::errors::OpsErrors;
use crate::traits::OperationsTrait;

/// Highlight intensity discontinuities with the discrete laplacian
///
/// ```text
///  0 -1  0
/// -1  4 -1      factor 1, offset 0
///  0 -1  0
/// ```
///
/// Uniform regions go to zero, edges keep a strong response. Negative
/// sums saturate at zero. The border ring is untouched.
#[derive(Default, Copy, Clone)]
pub struct Laplacian;

impl Laplacian {
    #[must_use]
    pub fn new() -> Laplacian {
        Self
    }
}

impl OperationsTrait for Laplacian {
    fn name(&self) -> &'static str {
        "Laplacian edge detector"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        Convolve::new(Kernel3x3::laplacian()).execute_impl(buffer)
    }
}
