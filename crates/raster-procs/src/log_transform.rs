//! Logarithmic intensity transform
use raster_core::buffer::PixelBuffer;

use crate::errors::OpsErrors;
use crate::lut::apply_single_lut;
use crate::traits::OperationsTrait;

/// Remap intensities through `(255 / ln 256) * ln(1 + v)`.
///
/// Expands dark regions at the expense of highlights; the same table
/// is applied to all three channels. 0 stays 0 and the curve is
/// monotone non-decreasing.
#[derive(Default, Copy, Clone)]
pub struct LogTransform;

impl LogTransform {
    #[must_use]
    pub fn new() -> LogTransform {
        Self
    }
}

impl OperationsTrait for LogTransform {
    fn name(&self) -> &'static str {
        "Log transform"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        let scale = 255.0 / 256_f64.ln();

        let mut table = [0_u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = (scale * f64::from(i as u32 + 1).ln()) as u8;
        }

        apply_single_lut(buffer, &table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use raster_core::buffer::PixelBuffer;

    use crate::log_transform::LogTransform;
    use crate::traits::OperationsTrait;

    #[test]
    fn curve_shape() {
        let mut buffer = PixelBuffer::from_fn(256, 1, |x, _| [x as u8; 3]).unwrap();
        LogTransform::new().execute(&mut buffer).unwrap();

        assert_eq!(buffer.pixel(0, 0), [0, 0, 0]);
        // the top of the curve lands on 255 modulo the truncating cast
        assert!(buffer.pixel(255, 0)[0] >= 254);

        let mut previous = 0;
        for x in 0..256 {
            let value = buffer.pixel(x, 0)[0];
            assert!(value >= previous, "log table must be monotone");
            previous = value;
        }
    }

    #[test]
    fn dark_values_are_lifted() {
        let mut buffer = PixelBuffer::fill([10, 10, 10], 3, 3).unwrap();
        LogTransform::new().execute(&mut buffer).unwrap();
        assert!(buffer.pixel(1, 1)[0] > 10);
    }
}
