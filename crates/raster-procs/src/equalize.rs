//! Histogram equalization
use raster_core::buffer::PixelBuffer;
use raster_core::log::trace;

use crate::errors::OpsErrors;
use crate::histogram::luma_histogram;
use crate::lut::apply_single_lut;
use crate::traits::OperationsTrait;

/// Stretch an image's cumulative luma distribution to the full
/// intensity range.
///
/// Builds the cumulative sum of the luma histogram, derives the
/// remap table `lut[i] = round((cdf[i] - cdf[0]) * 255 / (total - cdf[0]))`
/// and applies it to all three channels identically.
///
/// A flat image occupies a single histogram bucket and has no
/// distribution to stretch; the operation is then an explicit
/// identity, not an error.
#[derive(Default, Copy, Clone)]
pub struct HistogramEqualize;

impl HistogramEqualize {
    #[must_use]
    pub fn new() -> HistogramEqualize {
        Self
    }
}

impl OperationsTrait for HistogramEqualize {
    fn name(&self) -> &'static str {
        "Histogram equalization"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        let histogram = luma_histogram(buffer);

        let (width, height) = buffer.dimensions();
        let total = (width as u64) * (height as u64);

        let mut cdf = [0_u64; 256];
        let mut running = 0_u64;
        for (cumulative, count) in cdf.iter_mut().zip(histogram.iter()) {
            running += u64::from(*count);
            *cumulative = running;
        }

        if histogram.iter().any(|count| u64::from(*count) == total) {
            trace!("flat image, equalization leaves the buffer unchanged");
            return Ok(());
        }

        // base is the zero-intensity count, so span is never zero here
        let base = cdf[0];
        let span = (total - base) as f64;
        let mut table = [0_u8; 256];
        for (entry, cumulative) in table.iter_mut().zip(cdf.iter()) {
            *entry = (((cumulative - base) * 255) as f64 / span).round().min(255.0) as u8;
        }

        apply_single_lut(buffer, &table);
        Ok(())
    }
}
