//! Completion protocol types shared by every shim.
//!
//! A shim finishes in exactly one of two ways:
//!
//! - it records a [`Completion`] — success with a data payload, or failure
//!   with an ordered error list plus a data payload — and returns
//!   [`Outcome::Completed`], or
//! - it short-circuits the whole invocation with [`Outcome::Respond`],
//!   handing the caller a ready-to-send response instead of a result.
//!
//! `Completion` is a tagged union rather than two independent mutable
//! slots, so success data and error state cannot coexist.

use serde::Serialize;
use serde_json::Value;

/// The recorded result of a completed shim run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Completion {
    Success {
        data: Value,
    },
    Failure {
        errors: Vec<String>,
        data: Value,
    },
}

/// What a shim run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The shim recorded a [`Completion`]; the caller inspects the handle.
    Completed,
    /// The shim bypassed the result protocol entirely and the invocation
    /// ends with this response. No further processing should happen.
    Respond(Response),
}

/// A ready-to-send response produced by a short-circuiting shim.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    /// A `200 application/json` response — the JSON echo shim's shape.
    pub fn json(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: "application/json".to_string(),
            body,
        }
    }
}

/// An ordered sequence of error messages.
///
/// `fail()` accepts a single message or a list; both normalize here, so a
/// lone `&str` becomes a one-element sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorList(Vec<String>);

impl ErrorList {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<String> for ErrorList {
    fn from(message: String) -> Self {
        Self(vec![message])
    }
}

impl From<&str> for ErrorList {
    fn from(message: &str) -> Self {
        Self(vec![message.to_string()])
    }
}

impl From<Vec<String>> for ErrorList {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl From<&[&str]> for ErrorList {
    fn from(messages: &[&str]) -> Self {
        Self(messages.iter().map(|m| m.to_string()).collect())
    }
}
