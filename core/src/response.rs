//! Maps a response status and body to the operation outcome.
//!
//! A status other than the expected one is terminal: the body is read as an
//! error envelope if possible, otherwise only the status code is reported.

use serde::de::DeserializeOwned;

use crate::envelope::{decode_data, ErrorEnvelope};
use crate::error::ApiError;
use crate::http::HttpResponse;

pub fn expect_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => Err(ApiError::Remote {
            status: response.status,
            message: envelope.error_message,
        }),
        Err(_) => Err(ApiError::UnknownStatus(response.status)),
    }
}

pub fn decode_response<T: DeserializeOwned>(
    response: &HttpResponse,
    expected: u16,
) -> Result<T, ApiError> {
    expect_status(response, expected)?;
    decode_data(&response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountData;

    #[test]
    fn expected_status_without_body_succeeds() {
        assert!(expect_status(&HttpResponse::new(204, ""), 204).is_ok());
    }

    #[test]
    fn error_envelope_message_is_surfaced_verbatim() {
        let response = HttpResponse::new(409, r#"{"error_message":"invalid version"}"#);
        let err = expect_status(&response, 204).unwrap_err();
        assert!(matches!(err, ApiError::Remote { status: 409, .. }));
        assert_eq!(err.to_string(), "invalid version");
    }

    #[test]
    fn unreadable_error_body_reports_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = expect_status(&response, 200).unwrap_err();
        assert_eq!(err.to_string(), "unknown error, status code: 500");

        let response = HttpResponse::new(404, "");
        let err = decode_response::<AccountData>(&response, 200).unwrap_err();
        assert!(matches!(err, ApiError::UnknownStatus(404)));
    }

    #[test]
    fn success_status_decodes_data() {
        let response = HttpResponse::new(
            200,
            r#"{"data":{"id":"00000000-0000-0000-0000-000000000001","organisation_id":"00000000-0000-0000-0000-000000000002","type":"accounts","version":0,"attributes":{"name":["a"]}}}"#,
        );
        let account: AccountData = decode_response(&response, 200).unwrap();
        assert_eq!(account.version, Some(0));
        assert_eq!(account.attributes.name, vec!["a".to_string()]);
    }

    #[test]
    fn success_status_with_bad_body_is_decoding_error() {
        let response = HttpResponse::new(201, "{");
        let err = decode_response::<AccountData>(&response, 201).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
