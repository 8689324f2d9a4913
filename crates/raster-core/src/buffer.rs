/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! A packed, stride-aware pixel buffer
//!
//! [`PixelBuffer`] owns a contiguous `stride * height` byte region of
//! interleaved 8-bit RGB triples. The byte offset of channel `c` of
//! pixel `(x, y)` is `y * stride + x * 3 + c`; the `stride - width * 3`
//! trailing bytes of every row are padding and are never interpreted
//! as pixel data.
//!
//! Geometry is validated once at construction, operators downstream
//! assume a constructed buffer is consistent.
use crate::errors::BufferErrors;

/// Number of interleaved channels per pixel.
///
/// Channel order is fixed RGB: offset 0 is red, 1 green, 2 blue.
pub const CHANNELS: usize = 3;

/// Row alignment applied by [`PixelBuffer::new`], matching the
/// 4-byte row rounding common to decoded bitmap surfaces.
const ROW_ALIGN: usize = 4;

/// A packed 3-channel pixel buffer
///
/// # Example
/// ```
/// use raster_core::buffer::PixelBuffer;
/// let buffer = PixelBuffer::fill([255, 0, 0], 16, 8).unwrap();
/// assert_eq!(buffer.dimensions(), (16, 8));
/// assert_eq!(buffer.pixel(3, 2), [255, 0, 0]);
/// ```
#[derive(Clone)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    stride: usize,
    data:   Vec<u8>
}

impl PixelBuffer {
    /// Create a buffer over a caller-supplied byte region.
    ///
    /// # Errors
    /// Returns a [`BufferErrors`] if a dimension is zero, `stride`
    /// cannot hold `width` packed pixels, or `data` is not exactly
    /// `stride * height` bytes.
    pub fn from_vec(
        data: Vec<u8>, width: usize, height: usize, stride: usize
    ) -> Result<PixelBuffer, BufferErrors> {
        if width == 0 {
            return Err(BufferErrors::ZeroDimension("width"));
        }
        if height == 0 {
            return Err(BufferErrors::ZeroDimension("height"));
        }
        if stride < width * CHANNELS {
            return Err(BufferErrors::StrideTooSmall {
                stride,
                min: width * CHANNELS
            });
        }
        if data.len() != stride * height {
            return Err(BufferErrors::SizeMismatch {
                expected: stride * height,
                found:    data.len()
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            stride,
            data
        })
    }

    /// Create a zero-filled buffer with rows rounded up to a 4-byte
    /// alignment, so that the padding path is exercised by default.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<PixelBuffer, BufferErrors> {
        let stride = (width * CHANNELS).next_multiple_of(ROW_ALIGN);
        PixelBuffer::from_vec(vec![0; stride * height], width, height, stride)
    }

    /// Create a buffer with every pixel set to `pixel`.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero.
    pub fn fill(pixel: [u8; CHANNELS], width: usize, height: usize) -> Result<PixelBuffer, BufferErrors> {
        PixelBuffer::from_fn(width, height, |_, _| pixel)
    }

    /// Create a buffer by evaluating `pixel_fn(x, y)` for every pixel.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero.
    pub fn from_fn<F>(width: usize, height: usize, mut pixel_fn: F) -> Result<PixelBuffer, BufferErrors>
    where
        F: FnMut(usize, usize) -> [u8; CHANNELS]
    {
        let mut buffer = PixelBuffer::new(width, height)?;
        for (y, row) in buffer.rows_mut().enumerate() {
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                px.copy_from_slice(&pixel_fn(x, y));
            }
        }
        Ok(buffer)
    }

    /// Return `(width, height)` in pixels
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Byte length of one row including trailing padding
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// The whole backing byte region, padding included
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the whole backing byte region
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Iterate over rows trimmed to `width * 3` bytes, padding excluded
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let line = self.width * CHANNELS;
        self.data.chunks_exact(self.stride).map(move |row| &row[..line])
    }

    /// Iterate mutably over rows trimmed to `width * 3` bytes
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let line = self.width * CHANNELS;
        self.data
            .chunks_exact_mut(self.stride)
            .map(move |row| &mut row[..line])
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        assert!(x < self.width && y < self.height, "pixel access out of bounds");
        let offset = y * self.stride + x * CHANNELS;
        self.data[offset..offset + CHANNELS].try_into().unwrap()
    }

    /// Overwrite the pixel at `(x, y)`
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the buffer.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [u8; CHANNELS]) {
        assert!(x < self.width && y < self.height, "pixel access out of bounds");
        let offset = y * self.stride + x * CHANNELS;
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }

    /// An owned copy of the byte region, used as the immutable read
    /// source by the neighborhood operators
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Consume the buffer, returning the backing byte region
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::{PixelBuffer, CHANNELS};
    use crate::errors::BufferErrors;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 10),
            Err(BufferErrors::ZeroDimension(_))
        ));
        assert!(matches!(
            PixelBuffer::new(10, 0),
            Err(BufferErrors::ZeroDimension(_))
        ));
    }

    #[test]
    fn rejects_bad_stride() {
        let result = PixelBuffer::from_vec(vec![0; 100], 10, 10, 10);
        assert!(matches!(result, Err(BufferErrors::StrideTooSmall { .. })));
    }

    #[test]
    fn rejects_size_mismatch() {
        let result = PixelBuffer::from_vec(vec![0; 100], 5, 5, 16);
        assert!(matches!(result, Err(BufferErrors::SizeMismatch { .. })));
    }

    #[test]
    fn rows_exclude_padding() {
        // width 5 -> 15 pixel bytes, stride 16 -> 1 padding byte per row
        let mut buffer = PixelBuffer::from_vec(vec![0xAA; 16 * 4], 5, 4, 16).unwrap();
        for row in buffer.rows_mut() {
            assert_eq!(row.len(), 5 * CHANNELS);
            row.fill(0);
        }
        for row in buffer.data().chunks_exact(16) {
            assert_eq!(row[15], 0xAA);
            assert!(row[..15].iter().all(|x| *x == 0));
        }
    }

    #[test]
    fn pixel_roundtrip() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();
        buffer.set_pixel(3, 2, [1, 2, 3]);
        assert_eq!(buffer.pixel(3, 2), [1, 2, 3]);
        assert_eq!(buffer.pixel(2, 3), [0, 0, 0]);
    }

    #[test]
    fn from_fn_addresses_by_coordinate() {
        let buffer = PixelBuffer::from_fn(7, 3, |x, y| [x as u8, y as u8, 0]).unwrap();
        assert_eq!(buffer.pixel(6, 2), [6, 2, 0]);
        assert_eq!(buffer.pixel(0, 1), [0, 1, 0]);
    }
}
