//! Per-channel gamma correction
use raster_core::buffer::PixelBuffer;

use crate::errors::OpsErrors;
use crate::lut::apply_channel_luts;
use crate::traits::OperationsTrait;

/// Gamma-correct an image with one exponent per channel.
///
/// Each channel is remapped through
/// `clamp(255 * (v / 255)^(1 / gamma) + 0.5, 0, 255)`; the three
/// exponents are independent so a caller-facing dialog can adjust
/// color balance and brightness together. Tables are monotone
/// non-decreasing for any valid exponent.
///
/// Exponents must be strictly positive; zero, negative or NaN values
/// are rejected before the buffer is touched.
#[derive(Copy, Clone, Debug)]
pub struct Gamma {
    red:   f32,
    green: f32,
    blue:  f32
}

impl Gamma {
    #[must_use]
    pub fn new(red: f32, green: f32, blue: f32) -> Gamma {
        Gamma { red, green, blue }
    }
}

impl OperationsTrait for Gamma {
    fn name(&self) -> &'static str {
        "Gamma correction"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        for exponent in [self.red, self.green, self.blue] {
            if exponent.is_nan() || exponent <= 0.0 {
                return Err(OpsErrors::InvalidGamma(exponent));
            }
        }

        let tables = [
            gamma_table(self.red),
            gamma_table(self.green),
            gamma_table(self.blue)
        ];

        apply_channel_luts(buffer, &tables);
        Ok(())
    }
}

fn gamma_table(gamma: f32) -> [u8; 256] {
    let exponent = 1.0 / gamma;
    let mut table = [0_u8; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        let corrected = 255.0 * (i as f32 / 255.0).powf(exponent) + 0.5;
        *entry = corrected.min(255.0) as u8;
    }
    table
}
