//! Domain DTOs for the accounts API.
//!
//! # Design
//! The types serialize directly into the server's wire shape. Optional
//! booleans and enums use `Option` so that an explicit `false` is emitted
//! while an absent value is omitted. Strings and sequences treat empty as
//! absent, so they are plain `String` / `Vec` and skipped when empty.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::iso::{Country, Currency};

/// Resource type carried by every account record.
pub const ACCOUNTS_TYPE: &str = "accounts";

/// A single account record as sent to and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(rename = "type", default = "accounts_type")]
    pub resource_type: String,
    /// Assigned by the server; required to delete a specific revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: AccountAttributes,
}

impl AccountData {
    /// A record ready to be submitted: no version, `type` set to `accounts`.
    pub fn new(id: Uuid, organisation_id: Uuid, attributes: AccountAttributes) -> Self {
        Self {
            id,
            organisation_id,
            resource_type: ACCOUNTS_TYPE.to_string(),
            version: None,
            attributes,
        }
    }
}

fn accounts_type() -> String {
    ACCOUNTS_TYPE.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountClassification {
    Personal,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Confirmed,
    Failed,
}

/// Attributes of an account. Every field is optional on the wire; see
/// [`crate::validation::validate`] for the rules enforced before a create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<AccountClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub account_number: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub alternative_names: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub bank_id: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub bank_id_code: String,
    #[serde(default, skip_serializing_if = "currency_absent")]
    pub base_currency: Option<Currency>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub bic: String,
    #[serde(default, skip_serializing_if = "country_absent")]
    pub country: Option<Country>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub iban: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub name: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub secondary_identification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switched: Option<bool>,
}

impl AccountAttributes {
    /// Minimal attributes accepted by the validator.
    pub fn new<S: Into<String>>(name: impl IntoIterator<Item = S>, country: Country) -> Self {
        Self {
            name: name.into_iter().map(Into::into).collect(),
            country: Some(country),
            ..Self::default()
        }
    }

    /// Collapses values with no wire form (`Unknown` codes) into absence, the
    /// same way the encoder does.
    pub fn normalized(mut self) -> Self {
        if country_absent(&self.country) {
            self.country = None;
        }
        if currency_absent(&self.base_currency) {
            self.base_currency = None;
        }
        self
    }
}

fn country_absent(country: &Option<Country>) -> bool {
    country.is_none_or(|c| c.is_unknown())
}

fn currency_absent(currency: &Option<Currency>) -> bool {
    currency.is_none_or(|c| c.is_unknown())
}

/// Reads an explicit JSON `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
