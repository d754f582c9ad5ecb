//! Classification and decoding of registry responses.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use forge_types::ErrorResponse;

use crate::error::{ForgeError, Result};

/// Passes responses with a status below 300 through unchanged and converts
/// everything else into [`ForgeError::Remote`] (or [`ForgeError::Decode`] if
/// the error body is not the registry's `{message, errors}` shape).
///
/// An error body with an empty message still fails; the status line stands
/// in for the message.
pub(crate) async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.as_u16() < 300 {
        return Ok(response);
    }

    let body = response.bytes().await.map_err(ForgeError::transport)?;
    let error: ErrorResponse =
        serde_json::from_slice(&body).map_err(|source| ForgeError::Decode {
            status: status.as_u16(),
            source,
        })?;

    let message = if error.message.is_empty() {
        status.to_string()
    } else {
        error.message
    };
    warn!(status = status.as_u16(), %message, "registry returned an error");

    Err(ForgeError::Remote {
        status: status.as_u16(),
        message,
        errors: error.errors,
    })
}

/// Reads the body and decodes it as `T`.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(ForgeError::transport)?;
    serde_json::from_slice(&body).map_err(|source| ForgeError::Decode { status, source })
}

/// Succeeds on `204 No Content` without reading the body; any other status
/// goes through [`check_response`].
pub(crate) async fn expect_no_content(response: Response) -> Result<()> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(());
    }
    check_response(response).await.map(drop)
}

#[cfg(test)]
mod tests {
    use forge_types::Module;

    use super::*;

    fn response(status: u16, body: &'static str) -> Response {
        Response::from(
            http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_statuses_pass_through() {
        let res = check_response(response(200, "{}")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn error_body_message_becomes_remote_error() {
        let body = r#"{"message":"404 Module not found","errors":["Module not found"]}"#;

        let err = check_response(response(404, body)).await.unwrap_err();
        match err {
            ForgeError::Remote {
                status,
                ref message,
                ref errors,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "404 Module not found");
                assert_eq!(errors, &vec!["Module not found".to_owned()]);
            }
            ref other => panic!("expected remote error, got {other:?}"),
        }
        assert_eq!(err.to_string(), "404 Module not found");
    }

    #[tokio::test]
    async fn empty_message_falls_back_to_status_line() {
        let err = check_response(response(503, "{}")).await.unwrap_err();
        assert_eq!(err.to_string(), "503 Service Unavailable");
    }

    #[tokio::test]
    async fn undecodable_error_body_is_a_decode_error() {
        let err = check_response(response(500, "<html>oops</html>"))
            .await
            .unwrap_err();
        assert!(matches!(err, ForgeError::Decode { status: 500, .. }));
    }

    #[tokio::test]
    async fn no_content_succeeds_regardless_of_body() {
        expect_no_content(response(204, "not json at all")).await.unwrap();
    }

    #[tokio::test]
    async fn unexpected_status_on_no_content_call_is_checked() {
        let body = r#"{"message":"403 Forbidden","errors":["Not your module"]}"#;
        let err = expect_no_content(response(403, body)).await.unwrap_err();
        assert_eq!(err.to_string(), "403 Forbidden");
    }

    #[tokio::test]
    async fn body_of_wrong_shape_is_a_decode_error() {
        let err = decode_json::<Module>(response(200, "\"not an object\""))
            .await
            .unwrap_err();
        assert!(matches!(err, ForgeError::Decode { status: 200, .. }));
    }
}
