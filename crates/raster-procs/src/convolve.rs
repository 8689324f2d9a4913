/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! 3x3 convolution over packed pixel buffers
//!
//! The engine takes an immutable snapshot of the buffer as the read
//! source and writes weighted sums back into the live buffer, so
//! workers never observe each other's writes. Only interior pixels
//! (`1 <= x < width - 1`, `1 <= y < height - 1`) are rewritten; the
//! border ring is left bit-identical to the input. Intermediate sums
//! are carried in `i32` and saturated to `[0, 255]` at the end.
//!
//! Backs the box filter, the gaussian blur and the laplacian edge
//! detector.
use raster_core::buffer::{PixelBuffer, CHANNELS};
use raster_core::log::trace;

use crate::errors::OpsErrors;
use crate::traits::OperationsTrait;
use crate::utils::for_each_row_mut;

/// A 3x3 convolution kernel.
///
/// `weights` are in row-major order; each per-channel weighted sum is
/// divided by `factor` and `offset` is added before clamping. A zero
/// `factor` turns the convolution into an explicit no-op rather than
/// an error.
#[derive(Copy, Clone, Debug)]
pub struct Kernel3x3 {
    pub weights: [i32; 9],
    pub factor:  i32,
    pub offset:  i32
}

impl Kernel3x3 {
    #[must_use]
    pub fn new(weights: [i32; 9], factor: i32, offset: i32) -> Kernel3x3 {
        Kernel3x3 {
            weights,
            factor,
            offset
        }
    }

    /// Mean of the 3x3 neighborhood
    #[must_use]
    pub fn box_filter() -> Kernel3x3 {
        Kernel3x3::new([1, 1, 1, 1, 1, 1, 1, 1, 1], 9, 0)
    }

    /// Binomial 3x3 approximation of a gaussian
    #[must_use]
    #[rustfmt::skip]
    pub fn gaussian() -> Kernel3x3 {
        Kernel3x3::new(
            [1, 2, 1,
             2, 4, 2,
             1, 2, 1],
            16, 0
        )
    }

    /// Discrete laplacian, a second-derivative edge detector
    #[must_use]
    #[rustfmt::skip]
    pub fn laplacian() -> Kernel3x3 {
        Kernel3x3::new(
            [ 0, -1,  0,
             -1,  4, -1,
              0, -1,  0],
            1, 0
        )
    }
}

/// Convolve an image with a 3x3 kernel
pub struct Convolve {
    kernel: Kernel3x3
}

impl Convolve {
    #[must_use]
    pub fn new(kernel: Kernel3x3) -> Convolve {
        Convolve { kernel }
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        if self.kernel.factor == 0 {
            trace!("convolution kernel factor is zero, skipping");
            return Ok(());
        }

        let (width, height) = buffer.dimensions();
        let stride = buffer.stride();

        let source = buffer.snapshot();
        convolve_3x3(&source, buffer.data_mut(), width, height, stride, &self.kernel);
        Ok(())
    }
}

/// Low-level 3x3 convolution.
///
/// `source` is the immutable read snapshot, `dest` the live buffer;
/// both are `stride * height` bytes. Buffers with no interior pixels
/// (width or height below 3) are returned untouched.
pub fn convolve_3x3(
    source: &[u8], dest: &mut [u8], width: usize, height: usize, stride: usize, kernel: &Kernel3x3
) {
    if width < 3 || height < 3 || kernel.factor == 0 {
        return;
    }

    let Kernel3x3 {
        weights,
        factor,
        offset
    } = *kernel;

    for_each_row_mut(dest, stride, |y, row| {
        if y == 0 || y == height - 1 {
            return;
        }
        let above = &source[(y - 1) * stride..];
        let center = &source[y * stride..];
        let below = &source[(y + 1) * stride..];

        for x in 1..width - 1 {
            let px = x * CHANNELS;

            for c in 0..CHANNELS {
                let mut sum = 0_i32;
                sum += i32::from(above[px - 3 + c]) * weights[0];
                sum += i32::from(above[px + c]) * weights[1];
                sum += i32::from(above[px + 3 + c]) * weights[2];
                sum += i32::from(center[px - 3 + c]) * weights[3];
                sum += i32::from(center[px + c]) * weights[4];
                sum += i32::from(center[px + 3 + c]) * weights[5];
                sum += i32::from(below[px - 3 + c]) * weights[6];
                sum += i32::from(below[px + c]) * weights[7];
                sum += i32::from(below[px + 3 + c]) * weights[8];

                row[px + c] = (sum / factor + offset).clamp(0, 255) as u8;
            }
        }
    });
}
