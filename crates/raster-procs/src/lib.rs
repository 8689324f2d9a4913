/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! In-place raster operators for packed RGB pixel buffers
//!
//! Every operator implements the [`OperationsTrait`](crate::traits::OperationsTrait)
//! and mutates a borrowed [`PixelBuffer`](raster_core::buffer::PixelBuffer)
//! synchronously, partitioning rows across worker threads when the
//! `threads` feature (default) is enabled. Results are identical with
//! any worker count, including none.
//!
//! # Example
//! - Invert an image in place
//! ```
//! use raster_core::buffer::PixelBuffer;
//! use raster_procs::invert::Invert;
//! use raster_procs::traits::OperationsTrait;
//! let mut buffer = PixelBuffer::fill([12, 80, 201], 16, 16).unwrap();
//! Invert::new().execute(&mut buffer).unwrap();
//! assert_eq!(buffer.pixel(0, 0), [243, 175, 54]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod box_blur;
pub mod convolve;
pub mod equalize;
pub mod errors;
pub mod gamma;
pub mod gaussian_blur;
pub mod grayscale;
pub mod harris;
pub mod histogram;
pub mod invert;
pub mod laplacian;
pub mod log_transform;
mod luma;
pub mod lut;
pub mod sobel;
pub mod traits;
mod utils;
