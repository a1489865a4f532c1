//! The shim contract and per-invocation handle.
//!
//! A shim is a named unit of work constructed from merged parameters and
//! optional completion callbacks. Every shim honors the same two-outcome
//! protocol: its `run` calls [`Context::success`] or [`Context::fail`]
//! exactly once and returns [`Outcome::Completed`] — unless it
//! short-circuits with [`Outcome::Respond`], in which case neither result
//! call happens.
//!
//! Built-in shims:
//! - [`CropImage`] — centered percentage crop via the imaging backend
//! - [`JsonResponse`] — echoes params or raw body content as a JSON response

pub mod crop_image;
pub mod json_response;

pub use crop_image::CropImage;
pub use json_response::JsonResponse;

use crate::context::{Context, FailFn, SuccessFn};
use crate::outcome::{Completion, Outcome};
use crate::params::Params;
use serde_json::Value;

/// A named operation invocable through the registry.
///
/// The trait replaces the original system's reflection-style dispatch: the
/// entry point is always present, so "no entry point" is unrepresentable.
pub trait Shim: Send + Sync {
    /// Bare operation name (no registry prefix).
    fn name(&self) -> &'static str;

    /// Type-specific default parameters; caller values merge over these.
    fn defaults(&self) -> Params {
        Params::new()
    }

    /// Perform the operation against its invocation context.
    fn run(&self, ctx: &mut Context) -> Outcome;
}

/// One shim instance bound to one invocation context.
///
/// Built fresh per invocation by the registry (or directly, for
/// programmatic callers), executed once, then read and discarded.
#[derive(Debug)]
pub struct ShimHandle {
    shim: Box<dyn Shim>,
    ctx: Context,
}

impl ShimHandle {
    /// Construct a handle, merging the caller's params over the shim's
    /// defaults.
    pub fn new(shim: Box<dyn Shim>, params: Params) -> Self {
        let merged = params.merge_over(shim.defaults());
        Self {
            shim,
            ctx: Context::new(merged),
        }
    }

    pub fn name(&self) -> &'static str {
        self.shim.name()
    }

    pub fn set_on_success(&mut self, callback: SuccessFn) {
        self.ctx.set_on_success(callback);
    }

    pub fn set_on_fail(&mut self, callback: FailFn) {
        self.ctx.set_on_fail(callback);
    }

    /// Attach raw body content for shims that accept it.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.ctx.set_body(body);
    }

    /// Run the shim's operation.
    pub fn execute(&mut self) -> Outcome {
        self.shim.run(&mut self.ctx)
    }

    pub fn params(&self) -> &Params {
        self.ctx.params()
    }

    pub fn has_errors(&self) -> bool {
        self.ctx.has_errors()
    }

    pub fn success_data(&self) -> Option<&Value> {
        self.ctx.success_data()
    }

    pub fn errors(&self) -> &[String] {
        self.ctx.errors()
    }

    pub fn error_data(&self) -> Option<&Value> {
        self.ctx.error_data()
    }

    pub fn completion(&self) -> Option<&Completion> {
        self.ctx.completion()
    }
}

impl std::fmt::Debug for dyn Shim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shim({})", self.name())
    }
}
