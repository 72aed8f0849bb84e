use serde::{Deserialize, Serialize};

use crate::config::constants::{
    BASELINE_AVOIDED_EMISSIONS, BASELINE_ESTIMATED_REVENUE, BASELINE_SUBSTITUTED_ANTIOXIDANTS,
    BASELINE_VALORIZED_MATERIAL, INDUSTRIAL_SYMBIOSIS, TRAINED_PEOPLE,
};

/// The five scenario parameters, immutable per invocation.
///
/// Range enforcement is the caller's responsibility (see
/// `SimulationConfig::clamp_inputs`); `compute` accepts any real values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub total_volume: f64,        // tons/year of discards available
    pub recovery_rate: f64,       // fraction recovered from total volume
    pub emission_factor: f64,     // tCO2e avoided per ton valorized
    pub substitution_factor: f64, // fraction displacing synthetic antioxidants
    pub market_price: f64,        // USD per ton of natural antioxidants
}

/// Projected annual impacts for one scenario.
///
/// Created fresh on every `compute` call; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub valorized_material: f64,       // tons/year
    pub avoided_emissions: f64,        // tCO2e/year
    pub substituted_antioxidants: f64, // tons/year
    pub estimated_revenue: f64,        // USD/year
    pub trained_people: u32,
    pub industrial_symbiosis: u32,
}

impl SimulationResults {
    /// Fixed reference scenario the projection is compared against.
    pub fn baseline() -> Self {
        Self {
            valorized_material: BASELINE_VALORIZED_MATERIAL,
            avoided_emissions: BASELINE_AVOIDED_EMISSIONS,
            substituted_antioxidants: BASELINE_SUBSTITUTED_ANTIOXIDANTS,
            estimated_revenue: BASELINE_ESTIMATED_REVENUE,
            trained_people: TRAINED_PEOPLE,
            industrial_symbiosis: INDUSTRIAL_SYMBIOSIS,
        }
    }
}

/// Computes the circular-economy impact projection for one scenario.
///
/// Pure and total over the reals: no validation, no rounding, no I/O.
/// Non-finite inputs propagate to non-finite outputs.
pub fn compute(inputs: SimulationInputs) -> SimulationResults {
    let valorized_material = inputs.total_volume * inputs.recovery_rate;
    let avoided_emissions = inputs.total_volume * inputs.emission_factor;
    let substituted_antioxidants = valorized_material * inputs.substitution_factor;
    let estimated_revenue = substituted_antioxidants * inputs.market_price;

    SimulationResults {
        valorized_material,
        avoided_emissions,
        substituted_antioxidants,
        estimated_revenue,
        trained_people: TRAINED_PEOPLE,
        industrial_symbiosis: INDUSTRIAL_SYMBIOSIS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn inputs(
        total_volume: f64,
        recovery_rate: f64,
        emission_factor: f64,
        substitution_factor: f64,
        market_price: f64,
    ) -> SimulationInputs {
        SimulationInputs {
            total_volume,
            recovery_rate,
            emission_factor,
            substitution_factor,
            market_price,
        }
    }

    #[test]
    fn datasheet_scenario() {
        let results = compute(inputs(90.0, 0.276, 0.8, 0.20, 4000.0));
        assert!((results.valorized_material - 24.84).abs() < TOL);
        assert!((results.avoided_emissions - 72.0).abs() < TOL);
        assert!((results.substituted_antioxidants - 4.968).abs() < TOL);
        assert!((results.estimated_revenue - 19_872.0).abs() < TOL);
        assert_eq!(results.trained_people, 30);
        assert_eq!(results.industrial_symbiosis, 5);
    }

    #[test]
    fn lower_bound_scenario() {
        let results = compute(inputs(50.0, 0.10, 0.5, 0.10, 1000.0));
        assert!((results.valorized_material - 5.0).abs() < TOL);
        assert!((results.avoided_emissions - 25.0).abs() < TOL);
        assert!((results.substituted_antioxidants - 0.5).abs() < TOL);
        assert!((results.estimated_revenue - 500.0).abs() < TOL);
    }

    #[test]
    fn upper_bound_scenario() {
        let results = compute(inputs(200.0, 0.50, 2.0, 0.50, 10_000.0));
        assert!((results.valorized_material - 100.0).abs() < TOL);
        assert!((results.avoided_emissions - 400.0).abs() < TOL);
        assert!((results.substituted_antioxidants - 50.0).abs() < TOL);
        assert!((results.estimated_revenue - 500_000.0).abs() < TOL);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let scenario = inputs(137.5, 0.33, 1.7, 0.41, 7250.0);
        let first = compute(scenario);
        let second = compute(scenario);
        // Bit-identical, not merely close.
        assert_eq!(first, second);
    }

    #[test]
    fn formula_identities_hold_for_arbitrary_reals() {
        // Out-of-range and negative values are garbage-in-garbage-out but the
        // products must still hold exactly.
        for scenario in [
            inputs(90.0, 0.276, 0.8, 0.20, 4000.0),
            inputs(-10.0, 3.0, -0.5, 1.2, -100.0),
            inputs(0.0, 0.0, 0.0, 0.0, 0.0),
            inputs(1e12, 0.9999, 1.5, 0.3333, 9999.0),
        ] {
            let r = compute(scenario);
            assert!((r.valorized_material - scenario.total_volume * scenario.recovery_rate).abs() < TOL);
            assert!((r.avoided_emissions - scenario.total_volume * scenario.emission_factor).abs() < TOL);
            assert!(
                (r.substituted_antioxidants - r.valorized_material * scenario.substitution_factor)
                    .abs()
                    < TOL
            );
            assert!(
                (r.estimated_revenue - r.substituted_antioxidants * scenario.market_price).abs()
                    < TOL
            );
            assert_eq!(r.trained_people, 30);
            assert_eq!(r.industrial_symbiosis, 5);
        }
    }

    #[test]
    fn non_finite_inputs_propagate() {
        let results = compute(inputs(f64::NAN, 0.2, 0.8, 0.2, 4000.0));
        assert!(results.valorized_material.is_nan());
        assert!(results.avoided_emissions.is_nan());

        let results = compute(inputs(f64::INFINITY, 0.2, 0.8, 0.2, 4000.0));
        assert!(results.valorized_material.is_infinite());
    }

    #[test]
    fn outputs_monotonic_in_each_input() {
        let base = inputs(90.0, 0.276, 0.8, 0.20, 4000.0);
        let r0 = compute(base);

        let mut bumped = base;
        bumped.total_volume += 10.0;
        let r = compute(bumped);
        assert!(r.valorized_material >= r0.valorized_material);
        assert!(r.avoided_emissions >= r0.avoided_emissions);
        assert!(r.substituted_antioxidants >= r0.substituted_antioxidants);
        assert!(r.estimated_revenue >= r0.estimated_revenue);

        let mut bumped = base;
        bumped.recovery_rate += 0.05;
        let r = compute(bumped);
        assert!(r.valorized_material >= r0.valorized_material);
        assert!(r.substituted_antioxidants >= r0.substituted_antioxidants);
        assert!(r.estimated_revenue >= r0.estimated_revenue);

        let mut bumped = base;
        bumped.emission_factor += 0.1;
        let r = compute(bumped);
        assert!(r.avoided_emissions >= r0.avoided_emissions);

        let mut bumped = base;
        bumped.substitution_factor += 0.05;
        let r = compute(bumped);
        assert!(r.substituted_antioxidants >= r0.substituted_antioxidants);
        assert!(r.estimated_revenue >= r0.estimated_revenue);

        let mut bumped = base;
        bumped.market_price += 500.0;
        let r = compute(bumped);
        assert!(r.estimated_revenue >= r0.estimated_revenue);
    }

    #[test]
    fn baseline_matches_reference_datasheet() {
        let baseline = SimulationResults::baseline();
        assert!((baseline.valorized_material - 24.8).abs() < TOL);
        assert!((baseline.avoided_emissions - 72.0).abs() < TOL);
        assert!((baseline.substituted_antioxidants - 4.96).abs() < TOL);
        assert!((baseline.estimated_revenue - 19_840.0).abs() < TOL);
    }
}
