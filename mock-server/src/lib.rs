//! In-memory stand-in for the account-management API.
//!
//! Serves `POST`, `GET` and `DELETE` under `/v1/organisation/accounts` with
//! `application/vnd.api+json` bodies and `{"error_message": ...}` failures.
//! Attributes are stored as opaque JSON; only the presence of `name` and
//! `country` is checked.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const MEDIA_TYPE: &str = "application/vnd.api+json";
pub const ACCOUNTS_ROUTE: &str = "/v1/organisation/accounts";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Account>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(ACCOUNTS_ROUTE, post(create_account))
        .route(
            &format!("{ACCOUNTS_ROUTE}/{{id}}"),
            get(get_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn vnd_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, MEDIA_TYPE)], bytes).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::debug!(%status, %message, "request rejected");
    vnd_json(status, &ErrorBody { error_message: message })
}

fn parse_id(raw: &str) -> Result<Uuid, Response> {
    raw.parse()
        .map_err(|_| error(StatusCode::BAD_REQUEST, "id is not a valid uuid"))
}

fn missing_required(account: &Account) -> Vec<&'static str> {
    ["name", "country"]
        .into_iter()
        .filter(|field| match account.attributes.get(*field) {
            None | Some(serde_json::Value::Null) => true,
            Some(serde_json::Value::Array(items)) => items.is_empty(),
            Some(serde_json::Value::String(s)) => s.is_empty(),
            Some(_) => false,
        })
        .collect()
}

async fn create_account(State(db): State<Db>, body: Bytes) -> Response {
    let envelope: Envelope<Account> = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(err) => return error(StatusCode::BAD_REQUEST, format!("invalid request body: {err}")),
    };
    let mut account = envelope.data;

    let missing = missing_required(&account);
    if !missing.is_empty() {
        let list: Vec<String> = missing
            .iter()
            .map(|field| format!("{field} in body is required"))
            .collect();
        return error(
            StatusCode::BAD_REQUEST,
            format!("validation failure list:\n{}", list.join("\n")),
        );
    }

    let mut accounts = db.write().await;
    if accounts.contains_key(&account.id) {
        return error(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        );
    }
    account.version = Some(0);
    accounts.insert(account.id, account.clone());
    tracing::info!(id = %account.id, "account created");
    vnd_json(StatusCode::CREATED, &Envelope { data: account })
}

async fn get_account(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match db.read().await.get(&id) {
        Some(account) => vnd_json(StatusCode::OK, &Envelope { data: account }),
        None => error(StatusCode::NOT_FOUND, format!("record {id} does not exist")),
    }
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Some(version) = params.get("version").and_then(|v| v.parse::<u64>().ok()) else {
        return error(StatusCode::BAD_REQUEST, "invalid version number");
    };

    let mut accounts = db.write().await;
    let Some(account) = accounts.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if account.version != Some(version) {
        return error(StatusCode::CONFLICT, "invalid version");
    }
    accounts.remove(&id);
    tracing::info!(%id, version, "account deleted");
    StatusCode::NO_CONTENT.into_response()
}
