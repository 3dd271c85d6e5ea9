//! Error types for the accounts API client.
//!
//! # Design
//! Validation failures are raised before any I/O and carry the canonical
//! message for each constrained field. Everything that can go wrong after
//! that is an `ApiError`: the transport's own error is kept as the source,
//! and context outcomes always display `canceled` or `deadline exceeded` so
//! callers can pattern-match on the message.

use thiserror::Error;

use crate::context::ContextError;
use crate::formats::{
    ACCOUNT_NUMBER_FORMAT, BANK_ID_CODE_FORMAT, BANK_ID_FORMAT, BIC_FORMAT, IBAN_FORMAT,
};

/// A client-side rejection of account attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required length of AccountAttributes.Name is between 1 and 4")]
    NameLength,

    #[error("No item in AccountAttributes.Name can be empty")]
    NameEmpty,

    #[error("AccountAttributes.Country is required")]
    CountryMissing,

    #[error("Required format of AccountAttributes.Bic is: {}", BIC_FORMAT)]
    BicFormat,

    #[error("Required format of AccountAttributes.BankID is: {}", BANK_ID_FORMAT)]
    BankIdFormat,

    #[error("Required format of AccountAttributes.BankIDCode is: {}", BANK_ID_CODE_FORMAT)]
    BankIdCodeFormat,

    #[error("Required format of AccountAttributes.AccountNumber is: {}", ACCOUNT_NUMBER_FORMAT)]
    AccountNumberFormat,

    #[error("Required format of AccountAttributes.Iban is: {}", IBAN_FORMAT)]
    IbanFormat,

    #[error("Max length of AccountAttributes.AlternativeNames is 3")]
    AlternativeNamesLength,

    #[error("No item in AccountAttributes.AlternativeNames can be empty")]
    AlternativeNamesEmpty,
}

impl ValidationError {
    /// Stable name of the failure, independent of the message text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameLength => "NameLength",
            Self::NameEmpty => "NameEmpty",
            Self::CountryMissing => "CountryMissing",
            Self::BicFormat => "BicFormat",
            Self::BankIdFormat => "BankIdFormat",
            Self::BankIdCodeFormat => "BankIdCodeFormat",
            Self::AccountNumberFormat => "AccountNumberFormat",
            Self::IbanFormat => "IbanFormat",
            Self::AlternativeNamesLength => "AlternativeNamesLength",
            Self::AlternativeNamesEmpty => "AlternativeNamesEmpty",
        }
    }
}

/// Errors returned by the accounts client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The attributes were rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The caller's context was canceled or its deadline passed.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The request URL has no `http`/`https` scheme.
    #[error("unsupported protocol scheme {0:?}")]
    UnsupportedScheme(String),

    /// The request URL could not be parsed.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// DNS failure, refused connection, reset, and other transport faults.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with an unexpected status and an error envelope.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The server answered with an unexpected status and no readable error.
    #[error("unknown error, status code: {0}")]
    UnknownStatus(u16),

    /// A success body could not be decoded.
    #[error(transparent)]
    Deserialization(serde_json::Error),

    /// A request body could not be encoded.
    #[error(transparent)]
    Serialization(serde_json::Error),
}

impl ApiError {
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Context(ContextError::Canceled))
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::Context(ContextError::DeadlineExceeded))
    }

    /// Status code of a remote failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } | Self::UnknownStatus(status) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_embed_the_pattern() {
        assert_eq!(
            ValidationError::BicFormat.to_string(),
            "Required format of AccountAttributes.Bic is: ^([A-Z]{6}[A-Z0-9]{2}|[A-Z]{6}[A-Z0-9]{5})$"
        );
        assert!(ValidationError::IbanFormat.to_string().ends_with(IBAN_FORMAT));
    }

    #[test]
    fn alternative_names_messages_name_the_field() {
        assert!(ValidationError::AlternativeNamesLength
            .to_string()
            .contains("AlternativeNames"));
        assert_eq!(ValidationError::AlternativeNamesEmpty.code(), "AlternativeNamesEmpty");
    }

    #[test]
    fn remote_error_displays_server_message_verbatim() {
        let err = ApiError::Remote {
            status: 409,
            message: "invalid version".to_string(),
        };
        assert_eq!(err.to_string(), "invalid version");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn unknown_status_message() {
        assert_eq!(
            ApiError::UnknownStatus(502).to_string(),
            "unknown error, status code: 502"
        );
    }

    #[test]
    fn context_errors_keep_their_wording() {
        let canceled = ApiError::from(ContextError::Canceled);
        assert!(canceled.to_string().contains("canceled"));
        assert!(canceled.is_canceled());
        let expired = ApiError::from(ContextError::DeadlineExceeded);
        assert!(expired.to_string().contains("deadline exceeded"));
        assert!(expired.is_deadline_exceeded());
    }

    #[test]
    fn unsupported_scheme_message() {
        let err = ApiError::UnsupportedScheme(String::new());
        assert_eq!(err.to_string(), "unsupported protocol scheme \"\"");
    }
}
