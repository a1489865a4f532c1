//! Echo parameters or raw body content as a JSON response.
//!
//! This shim deliberately bypasses the success/fail protocol: it always
//! short-circuits with [`Outcome::Respond`], handing the caller a complete
//! `200 application/json` response. Nothing should run after it.
//!
//! - With raw body content, the body is decoded as JSON and re-emitted
//!   (undecodable content emits `null`).
//! - Without body content, the flat parameter mapping is emitted as a JSON
//!   object, keys in caller order.

use super::Shim;
use crate::context::Context;
use crate::outcome::{Outcome, Response};
use serde_json::Value;

pub struct JsonResponse;

impl Shim for JsonResponse {
    fn name(&self) -> &'static str {
        "json_response"
    }

    fn run(&self, ctx: &mut Context) -> Outcome {
        let payload = match ctx.body() {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(raw).unwrap_or(Value::Null)
            }
            _ => ctx.params().to_value(),
        };

        let body = serde_json::to_vec(&payload).unwrap_or_else(|_| b"null".to_vec());
        Outcome::Respond(Response::json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use serde_json::json;

    fn respond(params: Value, body: Option<&str>) -> Response {
        let mut ctx = Context::new(Params::from_value(params).unwrap());
        if let Some(body) = body {
            ctx.set_body(body);
        }
        match JsonResponse.run(&mut ctx) {
            Outcome::Respond(response) => {
                // The shim must not touch the result protocol.
                assert!(ctx.completion().is_none());
                response
            }
            Outcome::Completed => panic!("json_response must short-circuit"),
        }
    }

    #[test]
    fn echoes_params_as_json_object() {
        let response = respond(json!({"addon": "shimkit", "shim": "json_response"}), None);
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "application/json");

        let decoded: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(decoded, json!({"addon": "shimkit", "shim": "json_response"}));
    }

    #[test]
    fn body_content_wins_over_params() {
        let response = respond(
            json!({"ignored": true}),
            Some(r#"{"nested": {"name": "json_response"}}"#),
        );
        let decoded: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(decoded, json!({"nested": {"name": "json_response"}}));
    }

    #[test]
    fn undecodable_body_emits_null() {
        let response = respond(json!({}), Some("{not json"));
        assert_eq!(response.body, b"null");
    }

    #[test]
    fn blank_body_falls_back_to_params() {
        let response = respond(json!({"a": "1"}), Some("   "));
        let decoded: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(decoded, json!({"a": "1"}));
    }

    #[test]
    fn empty_params_emit_empty_object() {
        let response = respond(json!({}), None);
        assert_eq!(response.body, b"{}");
    }
}
