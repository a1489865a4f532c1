//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the crop shim
//! needs: identify and crop.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies, statically linked into the binary.

use super::params::CropParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// `crop` reports failure as an ordered list of error messages rather than
/// a single error: a request can fail on more than one output (the crop
/// itself and the optional thumbnail companion), and the shim passes the
/// whole list through to its `fail` call verbatim.
pub trait ImageBackend: Send + Sync {
    /// Get image dimensions without decoding the full image.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a crop request, writing `params.dest` (and the `_thumb`
    /// companion when requested). `Err` carries every error produced.
    fn crop(&self, params: &CropParams) -> Result<(), Vec<String>>;
}
