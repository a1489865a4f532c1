//! Centered percentage crop.
//!
//! Validates the source file, derives a centered crop region from the
//! `scale` parameter, and delegates the pixel work to an [`ImageBackend`].
//!
//! Parameters (tag attributes / `key=value`):
//! - `in` — source image path (must exist and be readable)
//! - `out` — destination path
//! - `scale` — percentage of each dimension to keep, centered
//! - `quality` — lossy encode quality, default 80
//! - `create_thumb` — also write a `_thumb` companion, default false
//! - `maintain_ratio` — keep the source aspect ratio, default true
//!
//! On success reports `{"path": <out>}`; on failure reports either a single
//! validation message or the backend's error list verbatim.

use super::Shim;
use crate::context::Context;
use crate::imaging::{CropParams, ImageBackend, Quality, RustBackend, centered_crop};
use crate::outcome::Outcome;
use crate::params::Params;
use serde_json::{Value, json};
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct CropImage {
    backend: Box<dyn ImageBackend>,
}

impl CropImage {
    pub fn new() -> Self {
        Self {
            backend: Box::new(RustBackend::new()),
        }
    }

    /// Inject a backend (tests use the recording mock).
    pub fn with_backend(backend: Box<dyn ImageBackend>) -> Self {
        Self { backend }
    }
}

impl Default for CropImage {
    fn default() -> Self {
        Self::new()
    }
}

/// Exists and is openable by this process.
fn is_readable(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

impl Shim for CropImage {
    fn name(&self) -> &'static str {
        "crop_image"
    }

    fn defaults(&self) -> Params {
        Params::from_value(json!({
            "quality": 80,
            "create_thumb": false,
            "maintain_ratio": true,
        }))
        .unwrap_or_default()
    }

    fn run(&self, ctx: &mut Context) -> Outcome {
        let source = PathBuf::from(ctx.param_str("in").unwrap_or_default());
        if !is_readable(&source) {
            return ctx.fail(
                format!("Cannot read source image: {}", source.display()),
                Value::Null,
            );
        }

        let dims = match self.backend.identify(&source) {
            Ok(dims) if dims.width > 0 && dims.height > 0 => dims,
            _ => return ctx.fail("Could not get image dimensions", Value::Null),
        };

        let scale = ctx.param_f64("scale").unwrap_or(100.0);
        let region = centered_crop((dims.width, dims.height), scale);

        let dest = ctx.param_str("out").unwrap_or_default();
        let request = CropParams {
            source,
            dest: PathBuf::from(&dest),
            quality: Quality::new(ctx.param_u32("quality").unwrap_or(80)),
            create_thumb: ctx.param_bool("create_thumb").unwrap_or(false),
            maintain_ratio: ctx.param_bool("maintain_ratio").unwrap_or(true),
            width: region.width,
            height: region.height,
            x_offset: region.x_offset,
            y_offset: region.y_offset,
        };

        match self.backend.crop(&request) {
            Err(errors) => ctx.fail(errors, Value::Null),
            Ok(()) => ctx.success(json!({"path": dest})),
        }
    }
}
