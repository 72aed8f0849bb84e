// Parameter Bounds (slider ranges from the P2.1 project datasheet)
pub const TOTAL_VOLUME_MIN: f64 = 50.0;          // tons/year
pub const TOTAL_VOLUME_MAX: f64 = 200.0;
pub const TOTAL_VOLUME_DEFAULT: f64 = 90.0;
pub const TOTAL_VOLUME_STEP: f64 = 10.0;

pub const RECOVERY_RATE_MIN: f64 = 0.10;         // fraction of total volume
pub const RECOVERY_RATE_MAX: f64 = 0.50;
pub const RECOVERY_RATE_DEFAULT: f64 = 0.276;
pub const RECOVERY_RATE_STEP: f64 = 0.01;

pub const EMISSION_FACTOR_MIN: f64 = 0.5;        // tCO2e per ton valorized
pub const EMISSION_FACTOR_MAX: f64 = 2.0;
pub const EMISSION_FACTOR_DEFAULT: f64 = 0.8;
pub const EMISSION_FACTOR_STEP: f64 = 0.1;

pub const SUBSTITUTION_FACTOR_MIN: f64 = 0.10;   // fraction of valorized material
pub const SUBSTITUTION_FACTOR_MAX: f64 = 0.50;
pub const SUBSTITUTION_FACTOR_DEFAULT: f64 = 0.20;
pub const SUBSTITUTION_FACTOR_STEP: f64 = 0.01;

pub const MARKET_PRICE_MIN: f64 = 1000.0;        // USD per ton of natural antioxidants
pub const MARKET_PRICE_MAX: f64 = 10_000.0;
pub const MARKET_PRICE_DEFAULT: f64 = 4000.0;
pub const MARKET_PRICE_STEP: f64 = 500.0;

// Static Project Indicators (fixed values from the project datasheet, not
// derived from the sliders)
pub const TRAINED_PEOPLE: u32 = 30;
pub const INDUSTRIAL_SYMBIOSIS: u32 = 5;

// Baseline Scenario (reference datasheet for P2.1, adjusted)
pub const BASELINE_VALORIZED_MATERIAL: f64 = 24.8;      // tons/year
pub const BASELINE_AVOIDED_EMISSIONS: f64 = 72.0;       // tCO2e/year
pub const BASELINE_SUBSTITUTED_ANTIOXIDANTS: f64 = 4.96; // tons/year
pub const BASELINE_ESTIMATED_REVENUE: f64 = 19_840.0;   // USD/year

// Brand Palette (RGB)
pub const COLOR_DARK_TEAL: (u8, u8, u8) = (14, 69, 74);       // 0E454A
pub const COLOR_VIBRANT_GREEN: (u8, u8, u8) = (31, 255, 95);  // 1FFF5F
pub const COLOR_LIGHT_BLUE: (u8, u8, u8) = (0, 155, 211);     // 009BD3
pub const COLOR_MID_BLUE: (u8, u8, u8) = (0, 140, 207);       // 008CCF
pub const COLOR_DARK_BLUE: (u8, u8, u8) = (0, 54, 110);       // 00366E

// Chart Geometry
pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;
pub const CHART_HEADROOM_FACTOR: f64 = 1.15;  // 15% margin above the tallest bar

// Minimum y-axis tops so near-zero projections still render readably
pub const EMISSIONS_AXIS_FLOOR: f64 = 10.0;   // tCO2e/year
pub const MATERIAL_AXIS_FLOOR: f64 = 5.0;     // tons/year
pub const REVENUE_AXIS_FLOOR: f64 = 5000.0;   // USD/year

// Sweep Defaults
pub const DEFAULT_SWEEP_STEPS: usize = 11;

// Partner Logos (unauthenticated remote assets; fetch failures are non-fatal)
pub const LOGO_SOURCES: [(&str, &str); 5] = [
    (
        "sustrend",
        "https://drive.google.com/uc?id=1vx_znPU2VfdkzeDtl91dlpw_p9mmu4dd",
    ),
    (
        "ttgreenfoods",
        "https://drive.google.com/uc?id=1uIQZQywjuQJz6Eokkj6dNSpBroJ8tQf8",
    ),
    ("creas", "https://www.creas.cl/wp-content/uploads/logo-creas.png"),
    ("corfo", "https://www.corfo.cl/sites/cpp/logo-corfo.png"),
    ("ciisa", "https://www.ciisa.cl/assets/img/logo-ciisa.png"),
];

pub const LOGO_FETCH_TIMEOUT_SECS: u64 = 15;
