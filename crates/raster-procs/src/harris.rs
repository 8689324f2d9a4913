/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! Harris corner detector
//!
//! A four-stage structure-tensor pipeline, each stage row-parallel:
//!
//! 1. Grayscale reduction into a transient luma plane.
//! 2. Central-difference gradients and their products
//!    (`Ix2`, `Iy2`, `IxIy`) for interior pixels.
//! 3. 3x3 box-window sums of the products and the response
//!    `R = det - k * trace^2` of the windowed tensor.
//! 4. Thresholding plus strict 8-neighbor non-maximum suppression;
//!    surviving pixels are painted pure red in the live buffer,
//!    everything else is untouched.
//!
//! All intermediate maps are `width * height` floats owned by the
//! call and discarded on return.
use raster_core::buffer::{PixelBuffer, CHANNELS};

use crate::errors::OpsErrors;
use crate::luma::{luma, luma_tables};
use crate::traits::OperationsTrait;
use crate::utils::for_each_row_mut;

/// Color written over detected corners
const CORNER_MARK: [u8; CHANNELS] = [255, 0, 0];

/// Detect corners and mark them in place.
///
/// `k` is the sensitivity constant of the response formula (commonly
/// 0.04 to 0.06; larger values reject more candidates) and
/// `threshold` the minimum response for a pixel to be considered,
/// which scales with the square of the input's gradient magnitudes.
/// Both are exposed rather than hard-coded since useful values vary
/// with the source material.
///
/// # Example
/// ```
/// use raster_core::buffer::PixelBuffer;
/// use raster_procs::harris::HarrisCorners;
/// use raster_procs::traits::OperationsTrait;
/// // a bright block on black produces four corners
/// let mut buffer = PixelBuffer::from_fn(24, 24, |x, y| {
///     if (8..16).contains(&x) && (8..16).contains(&y) {
///         [255, 255, 255]
///     } else {
///         [0, 0, 0]
///     }
/// })
/// .unwrap();
/// HarrisCorners::default().execute(&mut buffer).unwrap();
/// assert_eq!(buffer.pixel(8, 8), [255, 0, 0]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct HarrisCorners {
    /// Sensitivity constant of `R = det - k * trace^2`
    pub k:         f32,
    /// Minimum response for a candidate corner
    pub threshold: f32
}

impl Default for HarrisCorners {
    fn default() -> Self {
        HarrisCorners {
            k:         0.06,
            threshold: 1_000_000.0
        }
    }
}

impl HarrisCorners {
    #[must_use]
    pub fn new(k: f32, threshold: f32) -> HarrisCorners {
        HarrisCorners { k, threshold }
    }
}

impl OperationsTrait for HarrisCorners {
    fn name(&self) -> &'static str {
        "Harris corner detector"
    }

    #[allow(clippy::too_many_lines)]
    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        let (width, height) = buffer.dimensions();
        let stride = buffer.stride();

        if width < 3 || height < 3 {
            // no interior pixels, nothing can be a corner
            return Ok(());
        }

        // stage 1: grayscale reduction
        let tables = luma_tables();
        let mut gray = vec![0_u8; width * height];
        {
            let source = buffer.data();

            for_each_row_mut(&mut gray, width, |y, gray_row| {
                let row = &source[y * stride..y * stride + width * CHANNELS];

                for (value, px) in gray_row.iter_mut().zip(row.chunks_exact(CHANNELS)) {
                    *value = luma(&tables, px);
                }
            });
        }

        // stage 2: gradient products, [Ix2, Iy2, IxIy] per pixel
        let mut products = vec![[0_f32; 3]; width * height];

        for_each_row_mut(&mut products, width, |y, product_row| {
            if y == 0 || y == height - 1 {
                return;
            }
            let row = &gray[y * width..(y + 1) * width];
            let above = &gray[(y - 1) * width..y * width];
            let below = &gray[(y + 1) * width..(y + 2) * width];

            for x in 1..width - 1 {
                let gx = f32::from(row[x + 1]) - f32::from(row[x - 1]);
                let gy = f32::from(below[x]) - f32::from(above[x]);

                product_row[x] = [gx * gx, gy * gy, gx * gy];
            }
        });

        // stage 3: windowed structure-tensor response
        let k = self.k;
        let mut response = vec![0_f32; width * height];

        for_each_row_mut(&mut response, width, |y, response_row| {
            if y == 0 || y == height - 1 {
                return;
            }
            for x in 1..width - 1 {
                let mut sum = [0_f32; 3];

                for wy in y - 1..=y + 1 {
                    for cell in &products[wy * width + x - 1..=wy * width + x + 1] {
                        sum[0] += cell[0];
                        sum[1] += cell[1];
                        sum[2] += cell[2];
                    }
                }

                let det = sum[0] * sum[1] - sum[2] * sum[2];
                let trace = sum[0] + sum[1];

                response_row[x] = det - k * trace * trace;
            }
        });

        // stage 4: thresholding + strict non-maximum suppression
        let threshold = self.threshold;
        let response = &response;

        for_each_row_mut(buffer.data_mut(), stride, |y, row| {
            if y == 0 || y == height - 1 {
                return;
            }
            let base = y * width;

            for x in 1..width - 1 {
                let index = base + x;
                let value = response[index];

                if value <= threshold {
                    continue;
                }
                let up = index - width;
                let down = index + width;

                let is_local_max = value > response[index - 1]
                    && value > response[index + 1]
                    && value > response[up]
                    && value > response[down]
                    && value > response[up - 1]
                    && value > response[up + 1]
                    && value > response[down - 1]
                    && value > response[down + 1];

                if is_local_max {
                    row[x * CHANNELS..x * CHANNELS + CHANNELS].copy_from_slice(&CORNER_MARK);
                }
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use raster_core::buffer::PixelBuffer;

    use crate::harris::{HarrisCorners, CORNER_MARK};
    use crate::traits::OperationsTrait;

    fn marked_pixels(buffer: &PixelBuffer) -> Vec<(usize, usize)> {
        let (width, height) = buffer.dimensions();
        let mut marked = vec![];
        for y in 0..height {
            for x in 0..width {
                if buffer.pixel(x, y) == CORNER_MARK {
                    marked.push((x, y));
                }
            }
        }
        marked
    }

    fn adjacent(a: (usize, usize), b: (usize, usize)) -> bool {
        a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
    }

    #[test]
    fn flat_image_has_no_corners() {
        let mut buffer = PixelBuffer::fill([180, 180, 180], 16, 16).unwrap();

        HarrisCorners::default().execute(&mut buffer).unwrap();

        assert!(marked_pixels(&buffer).is_empty());
    }

    #[test]
    fn straight_edges_are_not_corners() {
        let mut buffer = PixelBuffer::from_fn(24, 24, |x, _| {
            if x < 12 {
                [0, 0, 0]
            } else {
                [255, 255, 255]
            }
        })
        .unwrap();

        HarrisCorners::default().execute(&mut buffer).unwrap();

        assert!(marked_pixels(&buffer).is_empty());
    }

    #[test]
    fn bright_square_yields_exactly_its_four_corners() {
        let mut buffer = PixelBuffer::from_fn(24, 24, |x, y| {
            if (8..16).contains(&x) && (8..16).contains(&y) {
                [255, 255, 255]
            } else {
                [0, 0, 0]
            }
        })
        .unwrap();

        HarrisCorners::default().execute(&mut buffer).unwrap();

        let mut marked = marked_pixels(&buffer);
        marked.sort_unstable();
        assert_eq!(marked, vec![(8, 8), (8, 15), (15, 8), (15, 15)]);
    }

    #[test]
    fn checkerboard_detections_respect_suppression() {
        // alternating 8x8 blocks; a perfectly symmetric board produces
        // tied responses around every intersection, which strict
        // suppression is allowed to reject entirely
        let mut buffer = PixelBuffer::from_fn(32, 32, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                [255, 255, 255]
            } else {
                [0, 0, 0]
            }
        })
        .unwrap();

        HarrisCorners::default().execute(&mut buffer).unwrap();

        let marked = marked_pixels(&buffer);
        for position in &marked {
            // every detection sits on a block-boundary intersection
            assert!(position.0 % 8 == 7 || position.0 % 8 == 0);
            assert!(position.1 % 8 == 7 || position.1 % 8 == 0);
        }
        for a in &marked {
            for b in &marked {
                assert!(!adjacent(*a, *b), "{a:?} and {b:?} are 8-neighbors");
            }
        }
    }

    #[test]
    fn relaxed_threshold_finds_soft_corners() {
        // low-contrast square stays under the default threshold but a
        // caller-tuned detector picks it up
        let mut buffer = PixelBuffer::from_fn(20, 20, |x, y| {
            if (6..13).contains(&x) && (6..13).contains(&y) {
                [10, 10, 10]
            } else {
                [0, 0, 0]
            }
        })
        .unwrap();
        let mut relaxed = buffer.clone();

        HarrisCorners::default().execute(&mut buffer).unwrap();
        assert!(marked_pixels(&buffer).is_empty());

        HarrisCorners::new(0.06, 1000.0).execute(&mut relaxed).unwrap();
        assert!(!marked_pixels(&relaxed).is_empty());
    }
}
