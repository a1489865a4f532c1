//! Image processing — pure Rust, zero external dependencies.
//!
//! The crop shim delegates all pixel work here, through the
//! [`ImageBackend`] trait:
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Crop** | `image::DynamicImage::crop_imm` |
//! | **Encode** | by destination extension; JPEG honors [`Quality`] |
//!
//! The module is split into:
//! - **Calculations**: pure centered-crop math (unit testable)
//! - **Parameters**: data structures describing a crop request
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CropRegion, centered_crop};
pub use params::{CropParams, Quality};
pub use rust_backend::RustBackend;
