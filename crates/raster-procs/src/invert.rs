//! Invert filter
use raster_core::buffer::PixelBuffer;

use crate::errors::OpsErrors;
use crate::lut::apply_single_lut;
use crate::traits::OperationsTrait;

/// Invert an image in place.
///
/// The formula for inverting an 8-bit pixel is
/// `pixel[x, y] = 255 - pixel[x, y]`, applied to every channel
/// through a single lookup table. Applying it twice restores the
/// original image.
#[derive(Default, Copy, Clone)]
pub struct Invert;

impl Invert {
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        let mut table = [0_u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = 255 - i as u8;
        }

        apply_single_lut(buffer, &table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use raster_core::buffer::PixelBuffer;

    use crate::invert::Invert;
    use crate::traits::OperationsTrait;

    #[test]
    fn invert_is_an_involution() {
        let mut rng = nanorand::WyRand::new();
        let mut buffer =
            PixelBuffer::from_fn(33, 21, |_, _| [rng.generate(), rng.generate(), rng.generate()])
                .unwrap();
        let original = buffer.clone();

        let invert = Invert::new();
        invert.execute(&mut buffer).unwrap();
        invert.execute(&mut buffer).unwrap();

        assert_eq!(buffer.data(), original.data());
    }

    #[test]
    fn known_values() {
        let mut buffer = PixelBuffer::fill([0, 128, 255], 4, 4).unwrap();
        Invert::new().execute(&mut buffer).unwrap();
        assert_eq!(buffer.pixel(1, 1), [255, 127, 0]);
    }
}
