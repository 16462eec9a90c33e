//! The `{ success, ... }` envelope every calculation answers with.

use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Outcome of a calculation as seen by callers.
///
/// Serializes to `{ "success": true, ...result }` or
/// `{ "success": false, "error": "message" }`. A failure is an ordinary
/// response, never a transport error.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationResponse<T> {
    Success(T),
    Failure { error: String },
}

impl<T> CalculationResponse<T> {
    pub fn failure(error: impl Into<String>) -> Self {
        CalculationResponse::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResponse::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CalculationResponse::Success(_) => None,
            CalculationResponse::Failure { error } => Some(error),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for CalculationResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(body) => CalculationResponse::Success(body),
            Err(err) => CalculationResponse::failure(err.to_string()),
        }
    }
}

impl<T: Serialize> Serialize for CalculationResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct SuccessEnvelope<'a, T> {
            success: bool,
            #[serde(flatten)]
            body: &'a T,
        }

        #[derive(Serialize)]
        struct FailureEnvelope<'a> {
            success: bool,
            error: &'a str,
        }

        match self {
            CalculationResponse::Success(body) => SuccessEnvelope {
                success: true,
                body,
            }
            .serialize(serializer),
            CalculationResponse::Failure { error } => FailureEnvelope {
                success: false,
                error: error.as_str(),
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Body {
        answer: u32,
    }

    #[test]
    fn success_flattens_body_next_to_flag() {
        let response = CalculationResponse::Success(Body { answer: 42 });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "answer": 42 })
        );
    }

    #[test]
    fn failure_carries_message_only() {
        let response: CalculationResponse<Body> = CalculationResponse::failure("Matrix must be square");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "error": "Matrix must be square" })
        );
    }

    #[test]
    fn converts_from_result() {
        let ok: CalculationResponse<u8> = Ok::<u8, String>(1).into();
        assert!(ok.is_success());

        let err: CalculationResponse<u8> = Err::<u8, _>("bad input".to_string()).into();
        assert_eq!(err.error(), Some("bad input"));
    }
}
