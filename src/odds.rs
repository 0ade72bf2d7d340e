use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price conventions a bookmaker may quote odds in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OddsUnit {
    #[default]
    Decimal,
    Fractional,
    American,
}

const AMERICAN_MIN: Decimal = Decimal::ONE_HUNDRED;

impl OddsUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            OddsUnit::Decimal => "decimal",
            OddsUnit::Fractional => "fractional",
            OddsUnit::American => "american",
        }
    }

    /// Checks that `odds` is a price this unit can express.
    ///
    /// Decimal and fractional odds must be positive. American odds carry a sign
    /// and must be at least 100 in magnitude.
    pub fn validate(&self, odds: Decimal) -> Result<(), ValidationError> {
        let valid = match self {
            OddsUnit::Decimal | OddsUnit::Fractional => odds > Decimal::ZERO,
            OddsUnit::American => odds.abs() >= AMERICAN_MIN,
        };

        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidOdds {
                odds,
                unit: self.to_string(),
            })
        }
    }

    /// Converts `odds` in this unit to decimal odds (total return per unit staked).
    pub fn to_decimal(&self, odds: Decimal) -> Option<Decimal> {
        self.validate(odds).ok()?;

        match self {
            OddsUnit::Decimal => Some(odds),
            OddsUnit::Fractional => odds.checked_add(Decimal::ONE),
            OddsUnit::American if odds.is_sign_positive() => {
                Decimal::ONE.checked_add(odds / AMERICAN_MIN)
            }
            OddsUnit::American => Decimal::ONE.checked_add(AMERICAN_MIN / odds.abs()),
        }
    }
}

impl fmt::Display for OddsUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OddsUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(OddsUnit::Decimal),
            "fractional" => Ok(OddsUnit::Fractional),
            "american" | "moneyline" => Ok(OddsUnit::American),
            _ => Err(ValidationError::UnknownOddsUnit(s.to_string())),
        }
    }
}
