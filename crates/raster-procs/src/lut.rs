/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! The lookup-table point operator engine
//!
//! Point operators precompute one 256-entry table per channel from a
//! closed-form function and sweep it over the buffer in data-parallel
//! row bands; no pixel reads outside its own triple. Row padding is
//! never touched.
//!
//! Backs invert, grayscale, gamma, the log transform and the
//! equalization apply step.
use raster_core::buffer::{PixelBuffer, CHANNELS};

use crate::luma::luma;
use crate::utils::for_each_row_mut;

/// Map each channel through its own table
pub fn apply_channel_luts(buffer: &mut PixelBuffer, tables: &[[u8; 256]; CHANNELS]) {
    let stride = buffer.stride();
    let line = buffer.width() * CHANNELS;

    for_each_row_mut(buffer.data_mut(), stride, |_, row| {
        for px in row[..line].chunks_exact_mut(CHANNELS) {
            px[0] = tables[0][usize::from(px[0])];
            px[1] = tables[1][usize::from(px[1])];
            px[2] = tables[2][usize::from(px[2])];
        }
    });
}

/// Map all three channels through the same table
pub fn apply_single_lut(buffer: &mut PixelBuffer, table: &[u8; 256]) {
    let stride = buffer.stride();
    let line = buffer.width() * CHANNELS;

    for_each_row_mut(buffer.data_mut(), stride, |_, row| {
        for px in row[..line].chunks_exact_mut(CHANNELS) {
            px[0] = table[usize::from(px[0])];
            px[1] = table[usize::from(px[1])];
            px[2] = table[usize::from(px[2])];
        }
    });
}

/// Reduce each pixel to its fixed-point weighted luma and write that
/// value back into all three channels
pub(crate) fn apply_luma_luts(buffer: &mut PixelBuffer, tables: &[[u32; 256]; CHANNELS]) {
    let stride = buffer.stride();
    let line = buffer.width() * CHANNELS;

    for_each_row_mut(buffer.data_mut(), stride, |_, row| {
        for px in row[..line].chunks_exact_mut(CHANNELS) {
            let gray = luma(tables, px);
            px.fill(gray);
        }
    });
}

#[cfg(test)]
mod tests {
    use raster_core::buffer::PixelBuffer;

    use crate::lut::apply_channel_luts;

    #[test]
    fn channels_are_mapped_independently() {
        let mut red = [0_u8; 256];
        let mut green = [0_u8; 256];
        let blue = [7_u8; 256];
        for i in 0..256 {
            red[i] = i as u8;
            green[i] = (i as u8).wrapping_add(1);
        }

        let mut buffer = PixelBuffer::fill([100, 100, 100], 9, 5).unwrap();
        apply_channel_luts(&mut buffer, &[red, green, blue]);

        assert_eq!(buffer.pixel(4, 2), [100, 101, 7]);
    }

    #[test]
    fn padding_bytes_survive_a_sweep() {
        let (width, height, stride) = (5, 6, 17);
        let mut buffer =
            PixelBuffer::from_vec(vec![0xEE; stride * height], width, height, stride).unwrap();

        apply_channel_luts(&mut buffer, &[[0; 256]; 3]);

        for row in buffer.data().chunks_exact(stride) {
            assert!(row[width * 3..].iter().all(|x| *x == 0xEE));
            assert!(row[..width * 3].iter().all(|x| *x == 0));
        }
    }
}
