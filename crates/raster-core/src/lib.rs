/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT or Apache-2.0 license
 */

//! Core primitives shared by the raster crates
//!
//! This crate provides the packed pixel buffer type the
//! operator crates transform, together with the errors that
//! can occur when constructing one and a small logging facade.
//!
//! It currently contains
//!
//! - A stride-aware, packed 3-channel [`PixelBuffer`](crate::buffer::PixelBuffer)
//! - Buffer construction errors
//! - Logging macros that forward to the `log` crate when the `log`
//!   feature is enabled and compile to nothing otherwise
#![macro_use]

pub mod buffer;
pub mod errors;
pub mod log;
