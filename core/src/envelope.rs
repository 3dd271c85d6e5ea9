//! The `{"data": ...}` wire envelope and the `{"error_message": ...}` error body.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::AccountData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    pub error_message: String,
}

pub fn encode_account(account: &AccountData) -> Result<String, ApiError> {
    serde_json::to_string(&Envelope { data: account }).map_err(ApiError::Serialization)
}

pub fn decode_account(body: &[u8]) -> Result<AccountData, ApiError> {
    decode_data(body)
}

pub(crate) fn decode_data<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(ApiError::Deserialization)
}
