//! Canonical patterns for the constrained account attributes.
//!
//! The pattern literals are public because they are embedded verbatim in
//! validation error messages. Each is compiled once, on first use.

use std::sync::LazyLock;

use regex::Regex;

pub const BIC_FORMAT: &str = "^([A-Z]{6}[A-Z0-9]{2}|[A-Z]{6}[A-Z0-9]{5})$";
pub const BANK_ID_FORMAT: &str = "^[A-Z0-9]{0,16}$";
pub const BANK_ID_CODE_FORMAT: &str = "^[A-Z]{0,16}$";
pub const ACCOUNT_NUMBER_FORMAT: &str = "^[A-Z0-9]{0,64}$";
pub const IBAN_FORMAT: &str = "^[A-Z]{2}[0-9]{2}[A-Z0-9]{0,64}$";

pub(crate) static BIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BIC_FORMAT).expect("bic regex is valid"));

pub(crate) static BANK_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BANK_ID_FORMAT).expect("bank id regex is valid"));

pub(crate) static BANK_ID_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BANK_ID_CODE_FORMAT).expect("bank id code regex is valid"));

pub(crate) static ACCOUNT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ACCOUNT_NUMBER_FORMAT).expect("account number regex is valid"));

pub(crate) static IBAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IBAN_FORMAT).expect("iban regex is valid"));
