//! Per-invocation shim context: merged params, optional raw body content,
//! optional completion callbacks, and the recorded result.
//!
//! This is the base contract every shim runs against. The context itself
//! never fails — it only carries the success or failure a shim reports
//! through [`Context::success`] and [`Context::fail`].

use crate::outcome::{Completion, ErrorList, Outcome};
use crate::params::Params;
use serde_json::Value;
use std::fmt;

/// Callback invoked when a shim reports success, with the success payload.
pub type SuccessFn = Box<dyn FnMut(&Value) + Send>;

/// Callback invoked when a shim reports failure, with the error list and
/// the error payload.
pub type FailFn = Box<dyn FnMut(&[String], &Value) + Send>;

/// Execution context for a single shim invocation.
///
/// Created by the registry per invocation and discarded after the caller
/// reads results; never reused across invocations.
pub struct Context {
    params: Params,
    body: Option<String>,
    on_success: Option<SuccessFn>,
    on_fail: Option<FailFn>,
    completion: Option<Completion>,
}

impl Context {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            body: None,
            on_success: None,
            on_fail: None,
            completion: None,
        }
    }

    /// Attach raw body content (the tag-body surface). Shims that accept
    /// free-form content read it via [`Context::body`].
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn set_on_success(&mut self, callback: SuccessFn) {
        self.on_success = Some(callback);
    }

    pub fn set_on_fail(&mut self, callback: FailFn) {
        self.on_fail = Some(callback);
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Colon-path param lookup; `None` on the first missing segment.
    pub fn param(&self, path: &str) -> Option<&Value> {
        self.params.get(path)
    }

    pub fn param_str(&self, path: &str) -> Option<String> {
        self.params.string_at(path)
    }

    pub fn param_f64(&self, path: &str) -> Option<f64> {
        self.params.f64_at(path)
    }

    pub fn param_u32(&self, path: &str) -> Option<u32> {
        self.params.u32_at(path)
    }

    pub fn param_bool(&self, path: &str) -> Option<bool> {
        self.params.bool_at(path)
    }

    /// Record a successful completion. Any prior failure is cleared, the
    /// success callback fires if one is registered.
    pub fn success(&mut self, data: Value) -> Outcome {
        self.completion = Some(Completion::Success { data });
        if let (Some(callback), Some(Completion::Success { data })) =
            (self.on_success.as_mut(), self.completion.as_ref())
        {
            callback(data);
        }
        Outcome::Completed
    }

    /// Record a failed completion. `errors` may be a single message or a
    /// list; either way it normalizes to an ordered sequence. Any prior
    /// success is cleared, the fail callback fires if one is registered.
    pub fn fail(&mut self, errors: impl Into<ErrorList>, data: Value) -> Outcome {
        let errors = errors.into().into_vec();
        self.completion = Some(Completion::Failure { errors, data });
        if let (Some(callback), Some(Completion::Failure { errors, data })) =
            (self.on_fail.as_mut(), self.completion.as_ref())
        {
            callback(errors, data);
        }
        Outcome::Completed
    }

    /// True iff the last result call was a failure with at least one message.
    pub fn has_errors(&self) -> bool {
        matches!(
            &self.completion,
            Some(Completion::Failure { errors, .. }) if !errors.is_empty()
        )
    }

    pub fn success_data(&self) -> Option<&Value> {
        match &self.completion {
            Some(Completion::Success { data }) => Some(data),
            _ => None,
        }
    }

    /// The recorded error sequence; empty unless the last call was `fail`.
    pub fn errors(&self) -> &[String] {
        match &self.completion {
            Some(Completion::Failure { errors, .. }) => errors,
            _ => &[],
        }
    }

    pub fn error_data(&self) -> Option<&Value> {
        match &self.completion {
            Some(Completion::Failure { data, .. }) => Some(data),
            _ => None,
        }
    }

    pub fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("on_success", &self.on_success.is_some())
            .field("on_fail", &self.on_fail.is_some())
            .field("completion", &self.completion)
            .finish()
    }
}
