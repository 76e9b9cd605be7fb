//! Classification of one probe exchange.

use serde_json::Value;

/// What a single probe run concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the credentials.
    Success,
    /// The request reached the server and was turned down (HTTP 400).
    Rejected { error_description: Option<String> },
    /// Any other status.
    Failed { status: u16 },
}

/// 200 → success, 400 → rejected (surfacing the body's `error_description`
/// when it carries one), everything else → failed with the status.
pub fn classify(status: u16, body: &Value) -> Outcome {
    match status {
        200 => Outcome::Success,
        400 => Outcome::Rejected {
            error_description: error_description(body),
        },
        other => Outcome::Failed { status: other },
    }
}

/// Top-level `error_description` string, if the body has one. The response
/// shape is not under our control, so anything else yields `None`.
fn error_description(body: &Value) -> Option<String> {
    body.get("error_description")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_200_is_success_regardless_of_body() {
        let bodies = vec![
            json!({}),
            json!({"token": "tok_abc"}),
            json!([1, 2, 3]),
            json!(null),
        ];

        for body in bodies {
            assert_eq!(classify(200, &body), Outcome::Success, "body: {}", body);
        }
    }

    #[test]
    fn status_400_surfaces_error_description() {
        let body = json!({"error_description": "invalid request_id"});
        assert_eq!(
            classify(400, &body),
            Outcome::Rejected {
                error_description: Some("invalid request_id".to_string())
            }
        );
    }

    #[test]
    fn status_400_without_description_is_still_rejected() {
        let bodies = vec![
            json!({}),
            json!({"error": "bad_request"}),
            json!({"error_description": 42}),
            json!(null),
        ];

        for body in bodies {
            assert_eq!(
                classify(400, &body),
                Outcome::Rejected {
                    error_description: None
                },
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn other_statuses_are_generic_failures() {
        for status in [201, 301, 401, 403, 404, 429, 500, 503] {
            assert_eq!(
                classify(status, &json!({})),
                Outcome::Failed { status },
                "status: {}",
                status
            );
        }
    }
}
