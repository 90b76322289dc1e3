//! Image encoding for iconmask.
//!
//! This module provides functionality for:
//! - Encoding RGBA buffers to PNG
//! - Writing the encoded icon to disk
//!
//! # Examples
//!
//! ```ignore
//! use iconmask_core::encode::encode_png;
//!
//! let pixels = vec![255u8; 64 * 64 * 4];
//! let png_bytes = encode_png(&pixels, 64, 64)?;
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, write_png, EncodeError};
