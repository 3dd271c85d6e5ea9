//! Client library for the account-management REST API.
//!
//! # Overview
//! Creates, fetches and deletes account records. Attributes are validated
//! locally before anything is sent, using the same rules and error
//! vocabulary as the server.
//!
//! # Design
//! - `AccountsApi` is stateless and sans-IO: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `AccountsClient` executes those requests with `reqwest` and races each
//!   exchange against the caller's `Context` (cancellation token plus
//!   optional deadline).
//! - Wire types serialize straight into the `{"data": ...}` envelope; absent
//!   optional values are omitted, explicit `false` is kept.
//!
//! ```no_run
//! use accounts_core::{AccountAttributes, AccountsApiClient, AccountsClient, Context, Country};
//! use uuid::Uuid;
//!
//! # async fn run() -> Result<(), accounts_core::ApiError> {
//! let client = AccountsClient::new("http://localhost:8080/v1")?;
//! let ctx = Context::background();
//! let attrs = AccountAttributes::new(["Jan Kowalski"], Country::PL);
//! let account = client.create_account(&ctx, Uuid::new_v4(), &attrs).await?;
//! let fetched = client.get_account(&ctx, account.id).await?;
//! client.delete_account(&ctx, fetched.id, fetched.version.unwrap_or_default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod client;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod formats;
pub mod http;
pub mod iso;
pub mod response;
pub mod types;
pub mod validation;

pub use accounts::{AccountsApiClient, AccountsClient};
pub use client::{new_account_id, AccountsApi};
pub use config::{ClientConfig, ACCOUNTS_PATH, DEFAULT_TIMEOUT};
pub use context::{Context, ContextError};
pub use envelope::{decode_account, encode_account, Envelope, ErrorEnvelope};
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, MEDIA_TYPE};
pub use iso::{Country, Currency};
pub use types::{AccountAttributes, AccountClassification, AccountData, AccountStatus};
pub use validation::validate;
