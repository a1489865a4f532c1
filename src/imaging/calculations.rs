//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// A crop rectangle within a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub width: u32,
    pub height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
}

/// Derive a centered crop region from a percentage scale.
///
/// `scale` is the percentage of each source dimension to keep; the region
/// is centered by splitting the remainder evenly on both sides:
///
/// - `width = floor(orig_w * scale / 100)` (height analogous)
/// - `x_offset = floor(((100 - scale) / 2) / 100 * orig_w)` (y analogous)
///
/// Scale is clamped to `0..=100`, so the region never exceeds the source.
///
/// # Examples
/// ```
/// # use shimkit::imaging::centered_crop;
/// let region = centered_crop((200, 100), 50.0);
/// assert_eq!(region.width, 100);
/// assert_eq!(region.height, 50);
/// assert_eq!(region.x_offset, 50);
/// assert_eq!(region.y_offset, 25);
/// ```
pub fn centered_crop(original: (u32, u32), scale: f64) -> CropRegion {
    let scale = if scale.is_finite() {
        scale.clamp(0.0, 100.0)
    } else {
        100.0
    };
    let (orig_w, orig_h) = original;
    let margin = ((100.0 - scale) / 2.0) / 100.0;

    CropRegion {
        width: (orig_w as f64 * scale / 100.0).floor() as u32,
        height: (orig_h as f64 * scale / 100.0).floor() as u32,
        x_offset: (margin * orig_w as f64).floor() as u32,
        y_offset: (margin * orig_h as f64).floor() as u32,
    }
}
