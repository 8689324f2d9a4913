/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! Calculate luma histogram statistics
//!
//! An image histogram counts, for each of the 256 intensity values,
//! how many pixels quantize to it. The buffer is split into
//! contiguous row bands; every band owns a private 256-bucket
//! accumulator (no shared mutable state, no atomics) and the bands
//! are merged by element-wise summation in band order, so the result
//! is independent of the worker count and of scheduling.
use std::cell::{BorrowError, Ref, RefCell};

use raster_core::buffer::{PixelBuffer, CHANNELS};

use crate::errors::OpsErrors;
use crate::luma::{luma, luma_tables};
use crate::traits::OperationsTrait;
use crate::utils::fold_rows;

/// Count quantized luma values over the whole buffer.
///
/// The quantization matches [`Grayscale`](crate::grayscale::Grayscale)
/// exactly. Postcondition: the counts sum to `width * height`.
#[must_use]
pub fn luma_histogram(buffer: &PixelBuffer) -> [u32; 256] {
    let tables = luma_tables();
    let line = buffer.width() * CHANNELS;

    let partials = fold_rows(
        buffer.data(),
        buffer.stride(),
        || [0_u32; 256],
        |accumulator, _, row| {
            for px in row[..line].chunks_exact(CHANNELS) {
                accumulator[usize::from(luma(&tables, px))] += 1;
            }
        }
    );

    let mut counts = [0_u32; 256];
    for partial in partials {
        for (total, part) in counts.iter_mut().zip(partial.iter()) {
            *total += part;
        }
    }
    counts
}

/// A luma histogram instance.
///
/// Counts can be fetched via `.counts()` after calling `execute`.
///
/// This operation does not mutate the image in any way, but it needs
/// to conform to the trait definition of `OperationsTrait` hence why
/// it takes a mutable buffer.
///
/// # Example
/// ```
/// use raster_core::buffer::PixelBuffer;
/// use raster_procs::histogram::LumaHistogram;
/// use raster_procs::traits::OperationsTrait;
/// let mut buffer = PixelBuffer::fill([100, 100, 100], 20, 10).unwrap();
/// let histogram = LumaHistogram::new();
/// histogram.execute(&mut buffer).unwrap();
/// assert_eq!(histogram.counts().unwrap()[100], 20 * 10);
/// ```
#[derive(Default)]
pub struct LumaHistogram {
    counts: RefCell<Vec<u32>>
}

impl LumaHistogram {
    #[must_use]
    pub fn new() -> LumaHistogram {
        LumaHistogram::default()
    }

    /// Returns the counts computed by the last `execute` call.
    ///
    /// # Errors
    /// Returns a `BorrowError` when the reference is still held.
    pub fn counts(&self) -> Result<Ref<'_, Vec<u32>>, BorrowError> {
        self.counts.try_borrow()
    }
}

impl OperationsTrait for LumaHistogram {
    fn name(&self) -> &'static str {
        "Luma histogram"
    }

    fn execute_impl(&self, buffer: &mut PixelBuffer) -> Result<(), OpsErrors> {
        *self.counts.borrow_mut() = luma_histogram(buffer).to_vec();
        Ok(())
    }
}
