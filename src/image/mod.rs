//! Image processing for icon generation.
//!
//! # Modules
//!
//! - [`bounds`]: content bounding box detection
//! - [`mask`]: rounded-rectangle and squircle alpha masks
//! - [`color`]: plate backdrop color from corner sampling
//! - [`resample`]: cropping and premultiplied resizing
//! - [`preview`]: single rounded preview icon
//! - [`macos`]: macOS icon set export

pub mod bounds;
pub mod color;
pub mod error;
pub mod io;
pub mod macos;
pub mod mask;
pub mod preview;
pub mod resample;
