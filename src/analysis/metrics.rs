use crate::core::simulation::SimulationResults;

/// One headline metric with its baseline reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDelta {
    pub current: f64,
    pub baseline: f64,
}

impl MetricDelta {
    pub fn delta(&self) -> f64 {
        self.current - self.baseline
    }
}

/// The four headline metrics compared against the baseline scenario, plus the
/// two static project indicators.
#[derive(Debug, Clone, Copy)]
pub struct ImpactAssessment {
    pub valorized_material: MetricDelta,
    pub avoided_emissions: MetricDelta,
    pub substituted_antioxidants: MetricDelta,
    pub estimated_revenue: MetricDelta,
    pub trained_people: u32,
    pub industrial_symbiosis: u32,
}

impl ImpactAssessment {
    pub fn new(results: &SimulationResults) -> Self {
        let baseline = SimulationResults::baseline();
        Self {
            valorized_material: MetricDelta {
                current: results.valorized_material,
                baseline: baseline.valorized_material,
            },
            avoided_emissions: MetricDelta {
                current: results.avoided_emissions,
                baseline: baseline.avoided_emissions,
            },
            substituted_antioxidants: MetricDelta {
                current: results.substituted_antioxidants,
                baseline: baseline.substituted_antioxidants,
            },
            estimated_revenue: MetricDelta {
                current: results.estimated_revenue,
                baseline: baseline.estimated_revenue,
            },
            trained_people: results.trained_people,
            industrial_symbiosis: results.industrial_symbiosis,
        }
    }
}

/// Formats a value with thousands separators, e.g. `19840.5` -> `"19,840.50"`.
pub fn fmt_thousands(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = integer_part.as_bytes();
    for (position, digit) in digits.iter().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction_part {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
