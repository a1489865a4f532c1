//! # Shimkit
//!
//! Named "shim" operations behind a uniform success/fail completion
//! contract. A registry resolves a string name to an operation, constructs
//! it with merged configuration, and the caller drives it through a
//! two-outcome protocol: every run ends in exactly one recorded result —
//! success with a data payload, or failure with an ordered error list.
//!
//! # Architecture: Resolve → Execute → Inspect
//!
//! ```text
//! caller → registry.resolve(name) → ShimHandle → execute()
//!        → shim calls success(data) | fail(errors, data) exactly once
//!        → caller inspects has_errors()/success_data()/errors()
//!          and/or receives the registered callback
//! ```
//!
//! One shim that refuses to fit the mold: `json_response` bypasses the
//! result protocol entirely and returns [`outcome::Outcome::Respond`], a
//! ready-to-send response that ends the invocation. The short-circuit is a
//! distinct enum variant, visible in every `run` signature, instead of an
//! implicit process exit.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`params`] | Ordered key→value parameter maps: recursive merge (caller wins), colon-path lookup, tag-string coercion |
//! | [`outcome`] | The completion protocol types: `Completion`, `Outcome`, `Response`, error-list normalization |
//! | [`context`] | Per-invocation state: merged params, optional callbacks, the recorded result |
//! | [`shims`] | The `Shim` trait, the per-invocation `ShimHandle`, and the built-in operations |
//! | [`registry`] | Name→factory resolution with `shim_` prefix normalization and the process-wide table |
//! | [`imaging`] | Pure-Rust image operations the crop shim delegates to: identify, centered crop, encode |
//! | [`output`] | CLI output formatting — pure `format_*` functions with `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Explicit Registration Over Name Reflection
//!
//! Operations are registered as factory functions in a plain map. There is
//! no load-by-filename step and no "does this type have a run method"
//! check — the [`shims::Shim`] trait makes the entry point mandatory, so
//! an operation without one is unrepresentable.
//!
//! ## Result State as a Tagged Union
//!
//! The completion lives in one `Option<Completion>` with two variants,
//! not in parallel success/error fields. Calling `success` after `fail`
//! (or vice versa) replaces the whole value, so the "never both populated"
//! invariant holds by construction rather than by convention.
//!
//! ## Strings In, Types At The Edge
//!
//! Both invocation surfaces deliver parameter values as strings (tag
//! attributes, CLI `key=value`). Shims read them through coercing
//! accessors (`param_u32`, `param_bool`, ...) so `scale="50"` and
//! `scale=50` behave identically, and a malformed value simply falls back
//! to the operation's default.
//!
//! # Programmatic Use
//!
//! ```
//! use shimkit::params::Params;
//! use shimkit::registry;
//! use serde_json::json;
//!
//! let params = Params::from_value(json!({
//!     "in": "missing.jpg",
//!     "out": "cropped.jpg",
//!     "scale": "50",
//! })).unwrap();
//!
//! let mut shim = registry::global()
//!     .resolve("crop_image", params, None, None)
//!     .expect("crop_image is built in");
//! shim.execute();
//!
//! assert!(shim.has_errors());
//! assert!(shim.errors()[0].contains("missing.jpg"));
//! ```

pub mod context;
pub mod imaging;
pub mod outcome;
pub mod output;
pub mod params;
pub mod registry;
pub mod shims;
