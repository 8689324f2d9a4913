//! Grayscale reduction for packed RGB buffers
use raster_core::buffer::PixelBuffer;

use crate::errors::OpsErrors;
use crate::luma::luma_tables;
use crate::lut::apply_luma_luts;
use crate::traits::OperationsTrait;

/// Convert an image to grayscale in place.
///
/// Each pixel is reduced to its fixed-point weighted luma
/// (`0.299 R + 0.587 G + 0.114 B`, truncated) and that value is
/// written back into all three channels. The same quantization is
/// used by [`luma_histogram`](crate::histogram::luma_histogram), so
/// converting to grayscale never changes an image's histogram.
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        let tables = luma_tables();
        apply_luma_luts(buffer, &tables);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use raster_core::buffer::PixelBuffer;

    use crate::grayscale::Grayscale;
    use crate::traits::OperationsTrait;

    #[test]
    fn grayscale_is_idempotent() {
        let mut rng = nanorand::WyRand::new();
        let mut buffer =
            PixelBuffer::from_fn(40, 25, |_, _| [rng.generate(), rng.generate(), rng.generate()])
                .unwrap();

        let grayscale = Grayscale::new();
        grayscale.execute(&mut buffer).unwrap();
        let once = buffer.clone();
        grayscale.execute(&mut buffer).unwrap();

        assert_eq!(buffer.data(), once.data());
    }

    #[test]
    fn all_channels_carry_the_luma() {
        let mut buffer = PixelBuffer::fill([255, 0, 0], 6, 6).unwrap();
        Grayscale::new().execute(&mut buffer).unwrap();
        assert_eq!(buffer.pixel(3, 3), [76, 76, 76]);
    }
}
