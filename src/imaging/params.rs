//! Parameter types for crop requests.
//!
//! [`CropParams`] describes *what* to do, not *how* to do it. It is the
//! interface between the crop shim (which validates input and computes the
//! region) and the [`backend`](super::backend) (which does the actual pixel
//! work). This separation allows swapping backends — tests use a recording
//! mock without touching any pixels.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Full specification for a crop operation.
///
/// `width`/`height` and the offsets are absolute pixel values — region
/// derivation from a scale percentage happens before this struct is built.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub quality: Quality,
    /// Also write a `<stem>_thumb.<ext>` companion next to `dest`.
    pub create_thumb: bool,
    /// Recompute the region height from the source aspect ratio.
    pub maintain_ratio: bool,
    pub width: u32,
    pub height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(80).value(), 80);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_80() {
        assert_eq!(Quality::default().value(), 80);
    }
}
