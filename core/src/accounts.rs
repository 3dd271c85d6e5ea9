//! Async client executing [`AccountsApi`] requests over `reqwest`.
//!
//! # Design
//! `AccountsClient` is immutable after construction and cheap to clone; the
//! wrapped `reqwest::Client` owns the connection pool. Every operation checks
//! the caller's [`Context`] before opening a connection and races the whole
//! exchange (send and body read) against it, so cancellation and deadlines
//! surface as [`ContextError`] rather than as transport errors.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::client::AccountsApi;
use crate::config::ClientConfig;
use crate::context::{Context, ContextError};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{AccountAttributes, AccountData};

/// Operations offered by the accounts API.
#[async_trait]
pub trait AccountsApiClient: Send + Sync {
    /// Validates `attributes`, then creates an account under `organisation_id`.
    async fn create_account(
        &self,
        ctx: &Context,
        organisation_id: Uuid,
        attributes: &AccountAttributes,
    ) -> Result<AccountData, ApiError>;

    async fn get_account(&self, ctx: &Context, account_id: Uuid) -> Result<AccountData, ApiError>;

    /// Deletes revision `version` of the account.
    async fn delete_account(
        &self,
        ctx: &Context,
        account_id: Uuid,
        version: u64,
    ) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct AccountsClient {
    api: AccountsApi,
    http: reqwest::Client,
}

impl AccountsClient {
    /// Client for `base_api_url` with the default 60 second request timeout.
    pub fn new(base_api_url: &str) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::new(base_api_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http_client(&config.base_url, http))
    }

    /// Uses a caller-supplied transport as is.
    pub fn with_http_client(base_api_url: &str, http: reqwest::Client) -> Self {
        Self {
            api: AccountsApi::new(base_api_url),
            http,
        }
    }

    pub fn api(&self) -> &AccountsApi {
        &self.api
    }

    async fn execute(&self, ctx: &Context, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(reason) = ctx.err() {
            debug!(%reason, "context done before dispatch");
            return Err(reason.into());
        }

        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");
        let mut builder = self.http.request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.to_string(), value.to_string()))
                })
                .collect();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(HttpResponse {
                status,
                headers,
                body,
            })
        };

        tokio::select! {
            biased;
            reason = ctx.done() => {
                debug!(%reason, "request abandoned");
                Err(reason.into())
            }
            result = exchange => result.map_err(transport_error),
        }
    }
}

/// Transport timeouts are reported as deadline outcomes.
fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        debug!(error = %err, "transport timeout");
        return ContextError::DeadlineExceeded.into();
    }
    ApiError::Transport(err)
}

fn log_unexpected(response: &HttpResponse, expected: u16) {
    if response.status != expected {
        warn!(status = response.status, expected, "unexpected response status");
    }
}

#[async_trait]
impl AccountsApiClient for AccountsClient {
    #[instrument(name = "accounts.create", skip(self, ctx, attributes), fields(%organisation_id), err)]
    async fn create_account(
        &self,
        ctx: &Context,
        organisation_id: Uuid,
        attributes: &AccountAttributes,
    ) -> Result<AccountData, ApiError> {
        let request = self.api.build_create_account(organisation_id, attributes)?;
        let response = self.execute(ctx, request).await?;
        log_unexpected(&response, 201);
        self.api.parse_create_account(response)
    }

    #[instrument(name = "accounts.get", skip(self, ctx), fields(%account_id), err)]
    async fn get_account(&self, ctx: &Context, account_id: Uuid) -> Result<AccountData, ApiError> {
        let request = self.api.build_get_account(account_id)?;
        let response = self.execute(ctx, request).await?;
        log_unexpected(&response, 200);
        self.api.parse_get_account(response)
    }

    #[instrument(name = "accounts.delete", skip(self, ctx), fields(%account_id), err)]
    async fn delete_account(
        &self,
        ctx: &Context,
        account_id: Uuid,
        version: u64,
    ) -> Result<(), ApiError> {
        let request = self.api.build_delete_account(account_id, version)?;
        let response = self.execute(ctx, request).await?;
        log_unexpected(&response, 204);
        self.api.parse_delete_account(response)
    }
}
