//! Shim registry: resolves an operation name to a constructed handle.
//!
//! The registry maps bare shim names to factory functions — an explicit
//! registration table, not reflection. Resolution:
//!
//! 1. Normalize the requested name: an optional `shim_` prefix is stripped,
//!    so `"crop_image"` and `"shim_crop_image"` hit the same entry.
//! 2. Look up the factory; absence is reported as `None`, never a panic —
//!    an unknown name is not a handler-level failure, there is no handler
//!    to fail on.
//! 3. Construct a fresh [`ShimHandle`] with the caller's params and
//!    callbacks. The registry holds no per-call state.
//!
//! [`global()`] exposes a process-wide registry of the built-in shims,
//! initialized at most once for the lifetime of the process.

use crate::context::{FailFn, SuccessFn};
use crate::params::Params;
use crate::shims::{CropImage, JsonResponse, Shim, ShimHandle};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Conventional registered-name prefix; optional on lookup.
pub const SHIM_PREFIX: &str = "shim_";

/// Constructs a boxed shim instance. Called once per resolution.
pub type ShimFactory = fn() -> Box<dyn Shim>;

/// Name→factory table.
#[derive(Debug, Default)]
pub struct Registry {
    factories: BTreeMap<String, ShimFactory>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the built-in shims.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(|| Box::new(CropImage::new()));
        registry.register(|| Box::new(JsonResponse));
        registry
    }

    /// Register a factory under the shim's own (bare) name. Re-registering
    /// a name replaces the previous factory.
    pub fn register(&mut self, factory: ShimFactory) {
        let name = bare_name(factory().name()).to_string();
        self.factories.insert(name, factory);
    }

    /// Resolve a name to a fresh handle. `None` means no such shim; the
    /// lookup never mutates the table.
    pub fn resolve(
        &self,
        name: &str,
        params: Params,
        on_success: Option<SuccessFn>,
        on_fail: Option<FailFn>,
    ) -> Option<ShimHandle> {
        let factory = self.factories.get(bare_name(name))?;
        let mut handle = ShimHandle::new(factory(), params);
        if let Some(callback) = on_success {
            handle.set_on_success(callback);
        }
        if let Some(callback) = on_fail {
            handle.set_on_fail(callback);
        }
        Some(handle)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(bare_name(name))
    }

    /// Registered bare names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Strip the conventional prefix if present.
fn bare_name(name: &str) -> &str {
    name.strip_prefix(SHIM_PREFIX).unwrap_or(name)
}

/// Canonical registered form of a name: bare name with the prefix applied.
pub fn canonical_name(name: &str) -> String {
    format!("{SHIM_PREFIX}{}", bare_name(name))
}

/// The process-wide registry of built-in shims, built on first use.
pub fn global() -> &'static Registry {
    static GLOBAL: OnceLock<Registry> = OnceLock::new();
    GLOBAL.get_or_init(Registry::builtin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_registers_both_shims() {
        let registry = Registry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["crop_image", "json_response"]);
    }

    #[test]
    fn prefixed_and_bare_names_resolve_identically() {
        let registry = Registry::builtin();

        let bare = registry.resolve("crop_image", Params::new(), None, None);
        let prefixed = registry.resolve("shim_crop_image", Params::new(), None, None);

        assert_eq!(bare.unwrap().name(), prefixed.unwrap().name());
        // One cache entry, not two
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unknown_name_is_none_and_leaves_table_untouched() {
        let registry = Registry::builtin();
        let before = registry.len();

        assert!(
            registry
                .resolve("no_such_shim", Params::new(), None, None)
                .is_none()
        );
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn resolve_constructs_fresh_handles() {
        let registry = Registry::builtin();
        let params = Params::from_value(json!({"a": "1"})).unwrap();

        let first = registry
            .resolve("json_response", params.clone(), None, None)
            .unwrap();
        let second = registry
            .resolve("json_response", Params::new(), None, None)
            .unwrap();

        // Per-invocation state: params differ between the two handles.
        assert_eq!(first.params().len(), 1);
        assert!(second.params().is_empty());
    }

    #[test]
    fn resolve_merges_defaults() {
        let registry = Registry::builtin();
        let handle = registry
            .resolve("crop_image", Params::new(), None, None)
            .unwrap();
        assert_eq!(handle.params().u32_at("quality"), Some(80));
    }

    #[test]
    fn canonical_name_round_trips() {
        assert_eq!(canonical_name("crop_image"), "shim_crop_image");
        assert_eq!(canonical_name("shim_crop_image"), "shim_crop_image");
    }

    #[test]
    fn global_is_stable_across_calls() {
        let a = global() as *const Registry;
        let b = global() as *const Registry;
        assert_eq!(a, b);
    }
}
