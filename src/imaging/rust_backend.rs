//! Pure Rust image processing backend — zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header-only, no full decode) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` |
//! | Encode → PNG/TIFF/WebP | `image::DynamicImage::save` (by extension) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::CropRegion;
use super::params::{CropParams, Quality};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Clamp a requested region to the source bounds.
///
/// When `maintain_ratio` is set the height is recomputed from the source
/// aspect ratio, so a width-only adjustment cannot distort the output.
fn resolve_region(params: &CropParams, src_w: u32, src_h: u32) -> Result<CropRegion, String> {
    let width = params.width.min(src_w);
    let mut height = params.height.min(src_h);

    if params.maintain_ratio && src_w > 0 {
        height = ((width as f64 * src_h as f64 / src_w as f64).round() as u32).min(src_h);
    }

    if width == 0 || height == 0 {
        return Err(format!(
            "Empty crop region for {} ({}x{})",
            params.source.display(),
            params.width,
            params.height
        ));
    }

    Ok(CropRegion {
        width,
        height,
        x_offset: params.x_offset.min(src_w - width),
        y_offset: params.y_offset.min(src_h - height),
    })
}

/// Encode an image to `path`, choosing the codec by extension.
///
/// JPEG goes through `JpegEncoder` so the quality setting applies (and the
/// pixels drop to RGB8 — JPEG has no alpha). Everything else uses the
/// extension-driven `save`.
fn save_image(image: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(BackendError::Io)?;
    }

    let is_jpeg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"));

    if is_jpeg {
        let file = File::create(path).map_err(BackendError::Io)?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, quality.value() as u8);
        image.to_rgb8().write_with_encoder(encoder).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
        })
    } else {
        image.save(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
        })
    }
}

/// Companion thumbnail path: `out/img.jpg` → `out/img_thumb.jpg`.
fn thumb_path(dest: &Path) -> PathBuf {
    let stem = dest
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let name = match dest.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_thumb.{ext}"),
        None => format!("{stem}_thumb"),
    };
    dest.with_file_name(name)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn crop(&self, params: &CropParams) -> Result<(), Vec<String>> {
        let image = match load_image(&params.source) {
            Ok(image) => image,
            Err(e) => return Err(vec![e.to_string()]),
        };

        let region = match resolve_region(params, image.width(), image.height()) {
            Ok(region) => region,
            Err(message) => return Err(vec![message]),
        };

        let cropped = image.crop_imm(
            region.x_offset,
            region.y_offset,
            region.width,
            region.height,
        );

        let mut errors = Vec::new();

        if let Err(e) = save_image(&cropped, &params.dest, params.quality) {
            errors.push(e.to_string());
        }

        if params.create_thumb {
            let thumb = thumb_path(&params.dest);
            if let Err(e) = save_image(&cropped, &thumb, params.quality) {
                errors.push(e.to_string());
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    fn crop_params(source: PathBuf, dest: PathBuf) -> CropParams {
        CropParams {
            source,
            dest,
            quality: Quality::default(),
            create_thumb: false,
            maintain_ratio: false,
            width: 100,
            height: 50,
            x_offset: 50,
            y_offset: 25,
        }
    }

    #[test]
    fn identify_reads_dimensions() {
        let tmp = TempDir::new().unwrap();
        let source = write_png(tmp.path(), "in.png", 200, 100);

        let dims = RustBackend::new().identify(&source).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 200,
                height: 100
            }
        );
    }

    #[test]
    fn identify_missing_file_is_an_error() {
        let err = RustBackend::new()
            .identify(Path::new("/nonexistent/file.png"))
            .unwrap_err();
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn crop_writes_region_sized_output() {
        let tmp = TempDir::new().unwrap();
        let source = write_png(tmp.path(), "in.png", 200, 100);
        let dest = tmp.path().join("out.png");

        RustBackend::new()
            .crop(&crop_params(source, dest.clone()))
            .unwrap();

        let (w, h) = image::image_dimensions(&dest).unwrap();
        assert_eq!((w, h), (100, 50));
    }

    #[test]
    fn crop_writes_thumb_companion() {
        let tmp = TempDir::new().unwrap();
        let source = write_png(tmp.path(), "in.png", 200, 100);
        let dest = tmp.path().join("out.png");

        let params = CropParams {
            create_thumb: true,
            ..crop_params(source, dest.clone())
        };
        RustBackend::new().crop(&params).unwrap();

        assert!(dest.exists());
        assert!(tmp.path().join("out_thumb.png").exists());
    }

    #[test]
    fn crop_missing_source_reports_error_list() {
        let tmp = TempDir::new().unwrap();
        let params = crop_params(
            tmp.path().join("missing.png"),
            tmp.path().join("out.png"),
        );

        let errors = RustBackend::new().crop(&params).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn crop_creates_destination_directories() {
        let tmp = TempDir::new().unwrap();
        let source = write_png(tmp.path(), "in.png", 200, 100);
        let dest = tmp.path().join("nested/dir/out.png");

        RustBackend::new()
            .crop(&crop_params(source, dest.clone()))
            .unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn resolve_region_clamps_to_bounds() {
        let params = CropParams {
            source: "in.png".into(),
            dest: "out.png".into(),
            quality: Quality::default(),
            create_thumb: false,
            maintain_ratio: false,
            width: 500,
            height: 500,
            x_offset: 900,
            y_offset: 900,
        };
        let region = resolve_region(&params, 200, 100).unwrap();
        assert_eq!(region.width, 200);
        assert_eq!(region.height, 100);
        assert_eq!(region.x_offset, 0);
        assert_eq!(region.y_offset, 0);
    }

    #[test]
    fn resolve_region_maintain_ratio_recomputes_height() {
        let params = CropParams {
            source: "in.png".into(),
            dest: "out.png".into(),
            quality: Quality::default(),
            create_thumb: false,
            maintain_ratio: true,
            width: 100,
            height: 90, // deliberately off-ratio
            x_offset: 0,
            y_offset: 0,
        };
        // Source is 200x100 (2:1), so width 100 forces height 50.
        let region = resolve_region(&params, 200, 100).unwrap();
        assert_eq!(region.height, 50);
    }

    #[test]
    fn resolve_region_rejects_empty() {
        let params = CropParams {
            source: "in.png".into(),
            dest: "out.png".into(),
            quality: Quality::default(),
            create_thumb: false,
            maintain_ratio: false,
            width: 0,
            height: 0,
            x_offset: 0,
            y_offset: 0,
        };
        assert!(resolve_region(&params, 200, 100).is_err());
    }

    #[test]
    fn thumb_path_inserts_suffix() {
        assert_eq!(
            thumb_path(Path::new("out/img.jpg")),
            PathBuf::from("out/img_thumb.jpg")
        );
        assert_eq!(thumb_path(Path::new("bare")), PathBuf::from("bare_thumb"));
    }
}
