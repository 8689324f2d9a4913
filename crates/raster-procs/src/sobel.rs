/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! Sobel gradient-magnitude edge detector
//!
//! A hand-fused single pass rather than two trips through the generic
//! convolution engine: both gradients are computed per channel from
//! one 3x3 read window and combined as `|Gx| + |Gy|`, the L1
//! approximation of the gradient magnitude (cheaper than the
//! Euclidean norm, visually equivalent for edge maps). The sum is
//! clamped through a table sized to the largest possible value.
//!
//! Unlike the generic engine, the outermost row and column ring is
//! forced to zero, giving the edge map a hard black border.
use raster_core::buffer::{PixelBuffer, CHANNELS};

use crate::errors::OpsErrors;
use crate::traits::OperationsTrait;
use crate::utils::for_each_row_mut;

/// Largest possible `|Gx| + |Gy|` for 8-bit input: 2 * 4 * 255
const MAX_MAGNITUDE: usize = 2040;

/// Perform a sobel image derivative.
///
/// This operation calculates the gradient of the image, which
/// represents how quickly pixel values change from one point to
/// another in both the horizontal and vertical directions, and
/// replaces each channel with the combined gradient magnitude.
///
/// The matrix for sobel is
///
/// Gx matrix
/// ```text
///   -1, 0, 1,
///   -2, 0, 2,
///   -1, 0, 1
/// ```
/// Gy matrix
/// ```text
/// -1,-2,-1,
///  0, 0, 0,
///  1, 2, 1
/// ```
#[derive(Default, Copy, Clone)]
pub struct Sobel;

impl Sobel {
    #[must_use]
    pub fn new() -> Sobel {
        Self
    }
}

impl OperationsTrait for Sobel {
    fn name(&self) -> &'static str {
        "Sobel edge detector"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        let (width, height) = buffer.dimensions();
        let stride = buffer.stride();
        let line = width * CHANNELS;

        if width < 3 || height < 3 {
            // everything is border ring
            for row in buffer.rows_mut() {
                row.fill(0);
            }
            return Ok(());
        }

        let mut clamp = [0_u8; MAX_MAGNITUDE + 1];
        for (i, entry) in clamp.iter_mut().enumerate() {
            *entry = i.min(255) as u8;
        }

        let source = buffer.snapshot();

        for_each_row_mut(buffer.data_mut(), stride, |y, row| {
            if y == 0 || y == height - 1 {
                row[..line].fill(0);
                return;
            }
            let above = &source[(y - 1) * stride..];
            let center = &source[y * stride..];
            let below = &source[(y + 1) * stride..];

            for x in 1..width - 1 {
                let px = x * CHANNELS;

                for c in 0..CHANNELS {
                    let tl = i32::from(above[px - 3 + c]);
                    let tc = i32::from(above[px + c]);
                    let tr = i32::from(above[px + 3 + c]);
                    let ml = i32::from(center[px - 3 + c]);
                    let mr = i32::from(center[px + 3 + c]);
                    let bl = i32::from(below[px - 3 + c]);
                    let bc = i32::from(below[px + c]);
                    let br = i32::from(below[px + 3 + c]);

                    // -1 0 1
                    // -2 0 2
                    // -1 0 1
                    let gx = (tr + 2 * mr + br) - (tl + 2 * ml + bl);

                    // -1 -2 -1
                    //  0  0  0
                    //  1  2  1
                    let gy = (bl + 2 * bc + br) - (tl + 2 * tc + tr);

                    row[px + c] = clamp[(gx.abs() + gy.abs()) as usize];
                }
            }
            // hard black border on the outermost columns
            row[..CHANNELS].fill(0);
            row[line - CHANNELS..line].fill(0);
        });
        Ok(())
    }
}
