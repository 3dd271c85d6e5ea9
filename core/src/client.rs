//! Stateless HTTP request builder and response parser for the accounts API.
//!
//! # Design
//! `AccountsApi` holds only the accounts endpoint and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. [`crate::AccountsClient`] executes the round-trip in
//! between; tests can skip the network entirely.

use std::sync::LazyLock;

use url::Url;
use uuid::Uuid;

use crate::config::ACCOUNTS_PATH;
use crate::envelope::encode_account;
use crate::error::ApiError;
use crate::http::{negotiation_headers, HttpMethod, HttpRequest, HttpResponse};
use crate::response::{decode_response, expect_status};
use crate::types::{AccountAttributes, AccountData};
use crate::validation::validate;

/// Node id for v1 UUIDs, random per process with the multicast bit set.
static NODE_ID: LazyLock<[u8; 6]> = LazyLock::new(|| {
    let random = Uuid::new_v4();
    let mut node = [0u8; 6];
    node.copy_from_slice(&random.as_bytes()[..6]);
    node[0] |= 0x01;
    node
});

/// A fresh time-ordered account id.
pub fn new_account_id() -> Uuid {
    Uuid::now_v1(&NODE_ID)
}

#[derive(Debug, Clone)]
pub struct AccountsApi {
    endpoint: String,
}

impl AccountsApi {
    pub fn new(base_api_url: &str) -> Self {
        Self {
            endpoint: format!("{}{ACCOUNTS_PATH}", base_api_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validates `attributes` and builds the POST for a new account with a
    /// freshly generated id.
    pub fn build_create_account(
        &self,
        organisation_id: Uuid,
        attributes: &AccountAttributes,
    ) -> Result<HttpRequest, ApiError> {
        self.build_create_account_with_id(new_account_id(), organisation_id, attributes)
    }

    pub fn build_create_account_with_id(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        attributes: &AccountAttributes,
    ) -> Result<HttpRequest, ApiError> {
        validate(attributes)?;
        let account = AccountData::new(id, organisation_id, attributes.clone());
        let body = encode_account(&account)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url()?,
            headers: negotiation_headers(),
            body: Some(body),
        })
    }

    pub fn build_get_account(&self, account_id: Uuid) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.account_url(account_id)?,
            headers: negotiation_headers(),
            body: None,
        })
    }

    pub fn build_delete_account(
        &self,
        account_id: Uuid,
        version: u64,
    ) -> Result<HttpRequest, ApiError> {
        let mut url = self.account_url(account_id)?;
        url.query_pairs_mut()
            .append_pair("version", &version.to_string());
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            url,
            headers: negotiation_headers(),
            body: None,
        })
    }

    pub fn parse_create_account(&self, response: HttpResponse) -> Result<AccountData, ApiError> {
        decode_response(&response, 201)
    }

    pub fn parse_get_account(&self, response: HttpResponse) -> Result<AccountData, ApiError> {
        decode_response(&response, 200)
    }

    pub fn parse_delete_account(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(&response, 204)
    }

    fn collection_url(&self) -> Result<Url, ApiError> {
        match Url::parse(&self.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
            Ok(url) => Err(ApiError::UnsupportedScheme(url.scheme().to_string())),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Err(ApiError::UnsupportedScheme(String::new()))
            }
            Err(source) => Err(ApiError::InvalidUrl {
                url: self.endpoint.clone(),
                source,
            }),
        }
    }

    /// Collection URL with the id appended as an escaped path segment.
    fn account_url(&self, account_id: Uuid) -> Result<Url, ApiError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| ApiError::UnsupportedScheme(String::new()))?
            .pop_if_empty()
            .push(&account_id.to_string());
        Ok(url)
    }
}
