//! Client-side checks run before an account is created.
//!
//! Checks run in a fixed order and the first failure is returned.

use crate::error::ValidationError;
use crate::formats::{
    ACCOUNT_NUMBER_REGEX, BANK_ID_CODE_REGEX, BANK_ID_REGEX, BIC_REGEX, IBAN_REGEX,
};
use crate::types::AccountAttributes;

const MAX_NAMES: usize = 4;
const MAX_ALTERNATIVE_NAMES: usize = 3;

pub fn validate(attrs: &AccountAttributes) -> Result<(), ValidationError> {
    if attrs.name.is_empty() || attrs.name.len() > MAX_NAMES {
        return Err(ValidationError::NameLength);
    }
    if attrs.name.iter().any(String::is_empty) {
        return Err(ValidationError::NameEmpty);
    }
    if attrs.country.is_none_or(|c| c.is_unknown()) {
        return Err(ValidationError::CountryMissing);
    }

    let formats = [
        (&attrs.bic, &*BIC_REGEX, ValidationError::BicFormat),
        (&attrs.bank_id, &*BANK_ID_REGEX, ValidationError::BankIdFormat),
        (&attrs.bank_id_code, &*BANK_ID_CODE_REGEX, ValidationError::BankIdCodeFormat),
        (&attrs.account_number, &*ACCOUNT_NUMBER_REGEX, ValidationError::AccountNumberFormat),
        (&attrs.iban, &*IBAN_REGEX, ValidationError::IbanFormat),
    ];
    for (value, regex, err) in formats {
        if !value.is_empty() && !regex.is_match(value) {
            return Err(err);
        }
    }

    if attrs.alternative_names.len() > MAX_ALTERNATIVE_NAMES {
        return Err(ValidationError::AlternativeNamesLength);
    }
    if attrs.alternative_names.iter().any(String::is_empty) {
        return Err(ValidationError::AlternativeNamesEmpty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso::Country;

    fn valid() -> AccountAttributes {
        AccountAttributes::new(["a"], Country::PL)
    }

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("n{i}")).collect()
    }

    #[test]
    fn minimal_attributes_pass() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn name_length_boundaries() {
        for (len, expected) in [
            (0, Err(ValidationError::NameLength)),
            (1, Ok(())),
            (4, Ok(())),
            (5, Err(ValidationError::NameLength)),
        ] {
            let attrs = AccountAttributes {
                name: names(len),
                ..valid()
            };
            assert_eq!(validate(&attrs), expected, "name length {len}");
        }
    }

    #[test]
    fn empty_name_element_is_rejected_at_any_position() {
        for pos in 0..4 {
            let mut name = names(4);
            name[pos] = String::new();
            let attrs = AccountAttributes { name, ..valid() };
            assert_eq!(validate(&attrs), Err(ValidationError::NameEmpty));
        }
    }

    #[test]
    fn missing_or_unknown_country_is_rejected() {
        let attrs = AccountAttributes {
            country: None,
            ..valid()
        };
        assert_eq!(validate(&attrs), Err(ValidationError::CountryMissing));
        let attrs = AccountAttributes {
            country: Some(Country::Unknown),
            ..valid()
        };
        assert_eq!(validate(&attrs), Err(ValidationError::CountryMissing));
    }

    #[test]
    fn bic_fixtures() {
        for (bic, ok) in [
            ("NWBKGB22", true),
            ("NWBKGB22ABC", true),
            ("nwbkgb22", false),
            ("0WBKGB22", false),
            ("NWBKGB22A", false),
        ] {
            let attrs = AccountAttributes {
                bic: bic.to_string(),
                ..valid()
            };
            let expected = if ok { Ok(()) } else { Err(ValidationError::BicFormat) };
            assert_eq!(validate(&attrs), expected, "bic {bic}");
        }
    }

    #[test]
    fn bank_id_fixtures() {
        let ok = AccountAttributes {
            bank_id: "AAAAAAAA1AAAAAA1".to_string(),
            ..valid()
        };
        assert_eq!(validate(&ok), Ok(()));
        let bad = AccountAttributes {
            bank_id: "AAAAAAAA1AAAAAA1A".to_string(),
            ..valid()
        };
        assert_eq!(validate(&bad), Err(ValidationError::BankIdFormat));
    }

    #[test]
    fn bank_id_code_fixtures() {
        let ok = AccountAttributes {
            bank_id_code: "GBDSC".to_string(),
            ..valid()
        };
        assert_eq!(validate(&ok), Ok(()));
        let bad = AccountAttributes {
            bank_id_code: "AAAAAAAA1".to_string(),
            ..valid()
        };
        assert_eq!(validate(&bad), Err(ValidationError::BankIdCodeFormat));
    }

    #[test]
    fn account_number_fixtures() {
        let ok = AccountAttributes {
            account_number: "GB11NWBK40030041426819".to_string(),
            ..valid()
        };
        assert_eq!(validate(&ok), Ok(()));
        let bad = AccountAttributes {
            account_number: "54gf".to_string(),
            ..valid()
        };
        assert_eq!(validate(&bad), Err(ValidationError::AccountNumberFormat));
    }

    #[test]
    fn iban_fixtures() {
        let ok = AccountAttributes {
            iban: "GB11NWBK40030041426819".to_string(),
            ..valid()
        };
        assert_eq!(validate(&ok), Ok(()));
        let bad = AccountAttributes {
            iban: "G111NWBK40030041426812".to_string(),
            ..valid()
        };
        assert_eq!(validate(&bad), Err(ValidationError::IbanFormat));
    }

    #[test]
    fn alternative_names_boundaries() {
        for (len, expected) in [
            (0, Ok(())),
            (3, Ok(())),
            (4, Err(ValidationError::AlternativeNamesLength)),
        ] {
            let attrs = AccountAttributes {
                alternative_names: names(len),
                ..valid()
            };
            assert_eq!(validate(&attrs), expected, "alternative_names length {len}");
        }
        let attrs = AccountAttributes {
            alternative_names: vec!["a".into(), String::new(), "c".into()],
            ..valid()
        };
        assert_eq!(validate(&attrs), Err(ValidationError::AlternativeNamesEmpty));
    }

    #[test]
    fn first_failure_wins() {
        let attrs = AccountAttributes {
            name: names(5),
            country: None,
            bic: "bad".to_string(),
            ..AccountAttributes::default()
        };
        assert_eq!(validate(&attrs), Err(ValidationError::NameLength));

        let attrs = AccountAttributes {
            bic: "bad".to_string(),
            iban: "bad".to_string(),
            ..valid()
        };
        assert_eq!(validate(&attrs), Err(ValidationError::BicFormat));

        let attrs = AccountAttributes {
            bank_id_code: "1".to_string(),
            bank_id: "a".to_string(),
            ..valid()
        };
        assert_eq!(validate(&attrs), Err(ValidationError::BankIdFormat));

        let attrs = AccountAttributes {
            iban: "bad".to_string(),
            alternative_names: names(4),
            ..valid()
        };
        assert_eq!(validate(&attrs), Err(ValidationError::IbanFormat));
    }
}
