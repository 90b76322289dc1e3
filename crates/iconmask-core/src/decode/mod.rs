//! Image decoding for iconmask.
//!
//! This module provides functionality for:
//! - Decoding PNG images into RGBA8 buffers
//! - Reading PNG files from disk
//! - Resizing decoded images
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use iconmask_core::decode::read_png;
//!
//! let image = read_png("icon.png")?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod png;
mod resize;
mod types;

pub use png::{decode_png, read_png};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType, CHANNELS};
