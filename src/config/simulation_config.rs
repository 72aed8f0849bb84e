use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::constants::*;
use crate::config::parameter::Parameter;
use crate::core::simulation::SimulationInputs;

/// Valid range, default and step size for one scenario parameter. Mirrors the
/// slider definition in the project datasheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParameterBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Slider ranges and defaults for the whole scenario. The calculator itself
/// performs no validation; clamping happens here, on the collection side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub total_volume: ParameterBounds,
    pub recovery_rate: ParameterBounds,
    pub emission_factor: ParameterBounds,
    pub substitution_factor: ParameterBounds,
    pub market_price: ParameterBounds,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_volume: ParameterBounds {
                min: TOTAL_VOLUME_MIN,
                max: TOTAL_VOLUME_MAX,
                default: TOTAL_VOLUME_DEFAULT,
                step: TOTAL_VOLUME_STEP,
            },
            recovery_rate: ParameterBounds {
                min: RECOVERY_RATE_MIN,
                max: RECOVERY_RATE_MAX,
                default: RECOVERY_RATE_DEFAULT,
                step: RECOVERY_RATE_STEP,
            },
            emission_factor: ParameterBounds {
                min: EMISSION_FACTOR_MIN,
                max: EMISSION_FACTOR_MAX,
                default: EMISSION_FACTOR_DEFAULT,
                step: EMISSION_FACTOR_STEP,
            },
            substitution_factor: ParameterBounds {
                min: SUBSTITUTION_FACTOR_MIN,
                max: SUBSTITUTION_FACTOR_MAX,
                default: SUBSTITUTION_FACTOR_DEFAULT,
                step: SUBSTITUTION_FACTOR_STEP,
            },
            market_price: ParameterBounds {
                min: MARKET_PRICE_MIN,
                max: MARKET_PRICE_MAX,
                default: MARKET_PRICE_DEFAULT,
                step: MARKET_PRICE_STEP,
            },
        }
    }
}

impl SimulationConfig {
    pub fn bounds(&self, parameter: Parameter) -> &ParameterBounds {
        match parameter {
            Parameter::TotalVolume => &self.total_volume,
            Parameter::RecoveryRate => &self.recovery_rate,
            Parameter::EmissionFactor => &self.emission_factor,
            Parameter::SubstitutionFactor => &self.substitution_factor,
            Parameter::MarketPrice => &self.market_price,
        }
    }

    /// Scenario with every parameter at its slider default.
    pub fn default_inputs(&self) -> SimulationInputs {
        SimulationInputs {
            total_volume: self.total_volume.default,
            recovery_rate: self.recovery_rate.default,
            emission_factor: self.emission_factor.default,
            substitution_factor: self.substitution_factor.default,
            market_price: self.market_price.default,
        }
    }

    /// Clamps every input to its valid range, warning on each adjustment.
    pub fn clamp_inputs(&self, raw: SimulationInputs) -> SimulationInputs {
        SimulationInputs {
            total_volume: self.clamp_one(Parameter::TotalVolume, raw.total_volume),
            recovery_rate: self.clamp_one(Parameter::RecoveryRate, raw.recovery_rate),
            emission_factor: self.clamp_one(Parameter::EmissionFactor, raw.emission_factor),
            substitution_factor: self.clamp_one(Parameter::SubstitutionFactor, raw.substitution_factor),
            market_price: self.clamp_one(Parameter::MarketPrice, raw.market_price),
        }
    }

    fn clamp_one(&self, parameter: Parameter, value: f64) -> f64 {
        let bounds = self.bounds(parameter);
        let clamped = bounds.clamp(value);
        if clamped != value {
            warn!(
                "{} = {} outside valid range [{}, {}], clamped to {}",
                parameter, value, bounds.min, bounds.max, clamped
            );
        }
        clamped
    }

    /// Applies a single parameter override onto an existing scenario.
    pub fn apply(&self, inputs: &mut SimulationInputs, parameter: Parameter, value: f64) {
        let value = self.clamp_one(parameter, value);
        match parameter {
            Parameter::TotalVolume => inputs.total_volume = value,
            Parameter::RecoveryRate => inputs.recovery_rate = value,
            Parameter::EmissionFactor => inputs.emission_factor = value,
            Parameter::SubstitutionFactor => inputs.substitution_factor = value,
            Parameter::MarketPrice => inputs.market_price = value,
        }
    }
}
