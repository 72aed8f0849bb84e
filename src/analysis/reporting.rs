use crate::analysis::metrics::{fmt_thousands, ImpactAssessment};
use crate::core::simulation::SimulationInputs;

fn delta_tag(delta: f64, decimals: usize, unit: &str) -> String {
    let sign = if delta >= 0.0 { "+" } else { "" };
    format!("{}{} {}", sign, fmt_thousands(delta, decimals), unit)
}

/// Prints the scenario parameters that produced a projection.
pub fn print_scenario_parameters(inputs: &SimulationInputs) {
    println!("\nParámetros de Simulación");
    println!("----------------------------------------");
    println!("  Volumen Total Disponible: {:.1} ton/año", inputs.total_volume);
    println!("  Tasa de Recuperación: {:.1}%", inputs.recovery_rate * 100.0);
    println!("  Factor de Emisión: {:.2} tCO2e/ton", inputs.emission_factor);
    println!("  Factor de Sustitución: {:.1}%", inputs.substitution_factor * 100.0);
    println!("  Precio de Mercado: USD {}/ton", fmt_thousands(inputs.market_price, 0));
}

/// Prints the headline metrics with their baseline deltas, followed by the
/// two static project indicators.
pub fn print_impact_report(assessment: &ImpactAssessment) {
    println!("\nResultados Clave del Proyecto (Proyección Anual)");
    println!("----------------------------------------");

    println!(
        "Material Valorizado: {} ton/año ({})",
        fmt_thousands(assessment.valorized_material.current, 2),
        delta_tag(assessment.valorized_material.delta(), 2, "ton")
    );
    println!("  Cantidad de material residual transformado en un nuevo producto.");

    println!(
        "Emisiones GEI Evitadas: {} tCO2e/año ({})",
        fmt_thousands(assessment.avoided_emissions.current, 2),
        delta_tag(assessment.avoided_emissions.delta(), 2, "tCO2e")
    );
    println!("  Reducción de gases de efecto invernadero por evitar la disposición de residuos.");

    println!(
        "Antioxidantes Sustituidos: {} ton/año ({})",
        fmt_thousands(assessment.substituted_antioxidants.current, 2),
        delta_tag(assessment.substituted_antioxidants.delta(), 2, "ton")
    );
    println!("  Cantidad de antioxidantes sintéticos reemplazados por los de origen natural.");

    println!(
        "Ingresos Estimados: USD {} ({})",
        fmt_thousands(assessment.estimated_revenue.current, 2),
        delta_tag(assessment.estimated_revenue.delta(), 2, "USD")
    );
    println!("  Estimación de ingresos generados por la venta del material valorizado.");

    println!("\nOtros Indicadores de Impacto");
    println!("----------------------------------------");
    println!("Personas Capacitadas: {}", assessment.trained_people);
    println!("Simbiosis Industrial: {} interacciones", assessment.industrial_symbiosis);
}
