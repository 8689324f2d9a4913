//! Box filter, the mean of each 3x3 neighborhood
use raster_core::buffer::PixelBuffer;

use crate::convolve::{Convolve, Kernel3x3};
use crate::errors::OpsErrors;
use crate::traits::OperationsTrait;

/// Blur an image by replacing every interior pixel with the mean of
/// its 3x3 neighborhood. The border ring is untouched.
#[derive(Default, Copy, Clone)]
pub struct BoxBlur;

impl BoxBlur {
    #[must_use]
    pub fn new() -> BoxBlur {
        Self
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        Convolve::new(Kernel3x3::box_filter()).execute_impl(buffer)
    }
}

#[cfg(test)]
mod tests {
    use raster_core::buffer::PixelBuffer;

    use crate::box_blur::BoxBlur;
    use crate::traits::OperationsTrait;

    #[test]
    fn uniform_image_is_unchanged() {
        let mut buffer = PixelBuffer::fill([77, 130, 200], 11, 7).unwrap();
        let original = buffer.clone();

        BoxBlur::new().execute(&mut buffer).unwrap();

        assert_eq!(buffer.data(), original.data());
    }

    #[test]
    fn single_bright_pixel_is_averaged_down() {
        let mut buffer = PixelBuffer::from_fn(5, 5, |x, y| {
            if (x, y) == (2, 2) {
                [90, 90, 90]
            } else {
                [0, 0, 0]
            }
        })
        .unwrap();

        BoxBlur::new().execute(&mut buffer).unwrap();

        // 90 / 9 spread over the whole neighborhood
        assert_eq!(buffer.pixel(2, 2), [10, 10, 10]);
        assert_eq!(buffer.pixel(1, 1), [10, 10, 10]);
        assert_eq!(buffer.pixel(3, 3), [10, 10, 10]);
    }
}
