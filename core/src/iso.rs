//! ISO-3166-1 alpha-2 country codes and ISO-4217 alpha-3 currency codes.
//!
//! # Design
//! `Country` is a closed enumeration with an `Unknown` sentinel. `Currency`
//! wraps the `rusty_money` ISO-4217 table with an `UNKNOWN` sentinel. Parsing
//! a code neither table knows yields the sentinel instead of failing, because
//! server responses are trusted and may carry codes newer than these tables.
//! The sentinel has no wire form; the attribute encoder omits it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Returned by strict `FromStr` parsing when the code is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} code: {code:?}")]
pub struct UnknownCodeError {
    kind: &'static str,
    code: String,
}

macro_rules! iso_code_table {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $lookup:ident, $accessor:ident { $($code:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $($code,)+
            Unknown,
        }

        impl $name {
            /// Looks the code up exactly as given; unrecognized codes map to `Unknown`.
            pub fn $lookup(code: &str) -> Self {
                match code {
                    $(stringify!($code) => Self::$code,)+
                    _ => Self::Unknown,
                }
            }

            /// The wire code, or `None` for the `Unknown` sentinel.
            pub fn $accessor(&self) -> Option<&'static str> {
                match self {
                    $(Self::$code => Some(stringify!($code)),)+
                    Self::Unknown => None,
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.$accessor().unwrap_or("Unknown"))
            }
        }

        impl FromStr for $name {
            type Err = UnknownCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match Self::$lookup(s) {
                    Self::Unknown => Err(UnknownCodeError {
                        kind: $kind,
                        code: s.to_string(),
                    }),
                    known => Ok(known),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.$accessor().unwrap_or_default())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = String::deserialize(deserializer)?;
                Ok(Self::$lookup(&code))
            }
        }
    };
}

iso_code_table! {
    /// ISO-3166-1 alpha-2 country code.
    Country, "country", from_alpha2, alpha2 {
        AD, AE, AF, AG, AI, AL, AM, AO, AQ, AR, AS, AT, AU, AW, AX, AZ,
        BA, BB, BD, BE, BF, BG, BH, BI, BJ, BL, BM, BN, BO, BQ, BR, BS, BT, BV, BW, BY, BZ,
        CA, CC, CD, CF, CG, CH, CI, CK, CL, CM, CN, CO, CR, CU, CV, CW, CX, CY, CZ,
        DE, DJ, DK, DM, DO, DZ,
        EC, EE, EG, EH, ER, ES, ET,
        FI, FJ, FK, FM, FO, FR,
        GA, GB, GD, GE, GF, GG, GH, GI, GL, GM, GN, GP, GQ, GR, GS, GT, GU, GW, GY,
        HK, HM, HN, HR, HT, HU,
        ID, IE, IL, IM, IN, IO, IQ, IR, IS, IT,
        JE, JM, JO, JP,
        KE, KG, KH, KI, KM, KN, KP, KR, KW, KY, KZ,
        LA, LB, LC, LI, LK, LR, LS, LT, LU, LV, LY,
        MA, MC, MD, ME, MF, MG, MH, MK, ML, MM, MN, MO, MP, MQ, MR, MS, MT, MU, MV, MW, MX, MY, MZ,
        NA, NC, NE, NF, NG, NI, NL, NO, NP, NR, NU, NZ,
        OM,
        PA, PE, PF, PG, PH, PK, PL, PM, PN, PR, PS, PT, PW, PY,
        QA,
        RE, RO, RS, RU, RW,
        SA, SB, SC, SD, SE, SG, SH, SI, SJ, SK, SL, SM, SN, SO, SR, SS, ST, SV, SX, SY, SZ,
        TC, TD, TF, TG, TH, TJ, TK, TL, TM, TN, TO, TR, TT, TV, TW, TZ,
        UA, UG, UM, US, UY, UZ,
        VA, VC, VE, VG, VI, VN, VU,
        WF, WS,
        YE, YT,
        ZA, ZM, ZW,
    }
}

/// ISO-4217 codes issued after the `rusty_money` table was published.
const SUPPLEMENTARY_CURRENCIES: [&str; 4] = ["SLE", "VED", "XCG", "ZWG"];

/// ISO-4217 alpha-3 currency code, backed by the `rusty_money` ISO table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency(Option<&'static str>);

impl Currency {
    pub const UNKNOWN: Self = Self(None);

    /// Looks the code up exactly as given; unrecognized codes map to `UNKNOWN`.
    pub fn from_alpha3(code: &str) -> Self {
        if let Some(currency) = rusty_money::iso::find(code).filter(|c| c.iso_alpha_code == code) {
            return Self(Some(currency.iso_alpha_code));
        }
        SUPPLEMENTARY_CURRENCIES
            .iter()
            .find(|supplementary| **supplementary == code)
            .map_or(Self::UNKNOWN, |supplementary| Self(Some(*supplementary)))
    }

    /// The wire code, or `None` for the `UNKNOWN` sentinel.
    pub fn alpha3(&self) -> Option<&'static str> {
        self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_none()
    }

    /// Name, exponent and symbol, where the ISO table carries them.
    pub fn details(&self) -> Option<&'static rusty_money::iso::Currency> {
        self.0.and_then(rusty_money::iso::find)
    }
}

impl From<&'static rusty_money::iso::Currency> for Currency {
    fn from(currency: &'static rusty_money::iso::Currency) -> Self {
        Self(Some(currency.iso_alpha_code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.unwrap_or("Unknown"))
    }
}

impl FromStr for Currency {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let currency = Self::from_alpha3(s);
        if currency.is_unknown() {
            return Err(UnknownCodeError {
                kind: "currency",
                code: s.to_string(),
            });
        }
        Ok(currency)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_alpha3(&code))
    }
}
