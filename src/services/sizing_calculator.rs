/// ============================================================
///  Residential Solar Sizing Engine
///
///  Closed-form pipeline:
///   1. Daily consumption  – monthly kWh averaged over MONTH_DAYS
///   2. Effective output   – peak sun hours × performance ratio
///                           (kWh produced per day per installed kW)
///   3. System size        – daily kWh / effective daily output
///   4. Panel count        – size / panel rating, ceiling, minimum one
///   5. Economics          – monthly savings at the flat tariff,
///                           installation cost, simple payback
///   6. Footprint          – panel count × panel area
/// ============================================================

use serde::Deserialize;
use thiserror::Error;

// ─── Default sizing parameters ───────────────────────────────
const SUN_HOURS_PER_DAY: f64 = 5.0; // assumed peak sun hours
const PERFORMANCE_RATIO: f64 = 0.8; // wiring, inverter and temperature losses
const PANEL_POWER_W: f64 = 550.0;
const PANEL_COST_COP: f64 = 2_100_000.0;
const ENERGY_PRICE_COP_PER_KWH: f64 = 926.0;
const PANEL_AREA_M2: f64 = 2.1; // footprint of a 550 W panel
const MONTH_DAYS: f64 = 30.0; // simplified average month length

/// Physical and economic parameters the sizing model runs on.
/// Built once at startup (defaults, optionally overridden from
/// config.json) and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SizingParams {
    pub sun_hours_per_day: f64,
    pub performance_ratio: f64,
    pub panel_power_w: f64,
    pub panel_cost_cop: f64,
    pub energy_price_cop_per_kwh: f64,
    pub panel_area_m2: f64,
    pub month_days: f64,
}

impl Default for SizingParams {
    fn default() -> Self {
        Self {
            sun_hours_per_day: SUN_HOURS_PER_DAY,
            performance_ratio: PERFORMANCE_RATIO,
            panel_power_w: PANEL_POWER_W,
            panel_cost_cop: PANEL_COST_COP,
            energy_price_cop_per_kwh: ENERGY_PRICE_COP_PER_KWH,
            panel_area_m2: PANEL_AREA_M2,
            month_days: MONTH_DAYS,
        }
    }
}

// ─── Error taxonomy ──────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum SizingError {
    /// Caller-supplied consumption failed validation. Recoverable:
    /// resubmit with a positive value.
    #[error("monthly consumption must be greater than zero, got {0} kWh")]
    InvalidInput(f64),
    /// The parameter table yields a non-positive effective daily
    /// output. A deployment bug, never a caller mistake.
    #[error("sizing parameters are invalid: effective daily output is not positive")]
    InvalidConfiguration,
}

// ─── Public output ───────────────────────────────────────────

/// Result of one sizing run. All f64 fields are already rounded
/// to two decimals; `panel_count` is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingResult {
    pub system_size_kw: f64,
    pub panel_count: u32,
    pub monthly_savings_cop: f64,
    pub installation_cost_cop: f64,
    pub payback_years: f64,
    pub area_m2: f64,
}

/// Sizes a residential installation for the given monthly consumption.
///
/// Pure function of its input and `params`: no I/O, no shared state,
/// identical inputs always produce identical results.
///
/// * `monthly_kwh` – average monthly consumption, must be > 0
///   (NaN fails the check and is rejected as invalid input)
pub fn calculate(monthly_kwh: f64, params: &SizingParams) -> Result<SizingResult, SizingError> {
    if !(monthly_kwh > 0.0) {
        return Err(SizingError::InvalidInput(monthly_kwh));
    }

    let daily_kwh = monthly_kwh / params.month_days;
    // kWh produced per day by each installed kW
    let effective_daily_output = params.sun_hours_per_day * params.performance_ratio;
    if effective_daily_output <= 0.0 {
        return Err(SizingError::InvalidConfiguration);
    }

    let system_size_kw = daily_kwh / effective_daily_output;
    let raw_panel_count = (system_size_kw * 1000.0) / params.panel_power_w;
    // Whole panels only, and never zero: the smallest viable install is one panel
    let panel_count = (raw_panel_count.ceil() as u32).max(1);

    let monthly_savings_cop = monthly_kwh * params.energy_price_cop_per_kwh;
    let installation_cost_cop = f64::from(panel_count) * params.panel_cost_cop;
    let annual_savings_cop = monthly_savings_cop * 12.0;
    // Zero savings cannot happen through the validated path (positive
    // consumption × positive tariff), kept for a misconfigured tariff.
    let payback_years = if annual_savings_cop != 0.0 {
        installation_cost_cop / annual_savings_cop
    } else {
        f64::INFINITY
    };
    let area_m2 = f64::from(panel_count) * params.panel_area_m2;

    Ok(SizingResult {
        system_size_kw: round2(system_size_kw),
        panel_count,
        monthly_savings_cop: round2(monthly_savings_cop),
        installation_cost_cop: round2(installation_cost_cop),
        payback_years: round2(payback_years),
        area_m2: round2(area_m2),
    })
}

/// Rounds to two decimals, half away from zero (`f64::round`).
#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
