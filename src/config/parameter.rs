use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five adjustable scenario parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Parameter {
    TotalVolume,
    RecoveryRate,
    EmissionFactor,
    SubstitutionFactor,
    MarketPrice,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::TotalVolume,
        Parameter::RecoveryRate,
        Parameter::EmissionFactor,
        Parameter::SubstitutionFactor,
        Parameter::MarketPrice,
    ];

    /// Unit suffix used in reports and CSV headers.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::TotalVolume => "ton/año",
            Parameter::RecoveryRate => "fracción",
            Parameter::EmissionFactor => "tCO2e/ton",
            Parameter::SubstitutionFactor => "fracción",
            Parameter::MarketPrice => "USD/ton",
        }
    }
}

impl FromStr for Parameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total-volume" | "total_volume" => Ok(Parameter::TotalVolume),
            "recovery-rate" | "recovery_rate" => Ok(Parameter::RecoveryRate),
            "emission-factor" | "emission_factor" => Ok(Parameter::EmissionFactor),
            "substitution-factor" | "substitution_factor" => Ok(Parameter::SubstitutionFactor),
            "market-price" | "market_price" => Ok(Parameter::MarketPrice),
            _ => Err(format!(
                "Unknown parameter: {} (expected one of total-volume, recovery-rate, \
                 emission-factor, substitution-factor, market-price)",
                s
            )),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::TotalVolume => write!(f, "total-volume"),
            Parameter::RecoveryRate => write!(f, "recovery-rate"),
            Parameter::EmissionFactor => write!(f, "emission-factor"),
            Parameter::SubstitutionFactor => write!(f, "substitution-factor"),
            Parameter::MarketPrice => write!(f, "market-price"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("total-volume".parse::<Parameter>().unwrap(), Parameter::TotalVolume);
        assert_eq!("market_price".parse::<Parameter>().unwrap(), Parameter::MarketPrice);
        assert!("volume".parse::<Parameter>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for parameter in Parameter::ALL {
            assert_eq!(parameter.to_string().parse::<Parameter>().unwrap(), parameter);
        }
    }
}
