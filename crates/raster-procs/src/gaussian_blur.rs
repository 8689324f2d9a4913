//! Gaussian blur via the binomial 3x3 kernel
use raster_core::buffer::PixelBuffer;

use crate::convolve::{Convolve, Kernel3x3};
use crate::errors::OpsErrors;
use crate::traits::OperationsTrait;

/// Smooth an image with the separable binomial kernel
///
/// ```text
/// 1 2 1
/// 2 4 2      factor 16
/// 1 2 1
/// ```
///
/// which weighs the center more heavily than a box filter and keeps
/// edges softer. The border ring is untouched.
#[derive(Default, Copy, Clone)]
pub struct GaussianBlur;

impl GaussianBlur {
    #[must_use]
    pub fn new() -> GaussianBlur {
        Self
    }
}

impl OperationsTrait for GaussianBlur {
    fn name(&self) -> &'static str {
        "Gaussian blur"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        Convolve::new(Kernel3x3::gaussian()).execute_impl(buffer)
    }
}
