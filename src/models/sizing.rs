use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::sizing_calculator::SizingResult;

// ─── Request / response wire types ───────────────────────────────────────────

/// Input reported by the front-end: average monthly consumption.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct SizingRequest {
    /// Average monthly energy consumption in kWh. Must be > 0.
    pub monthly_kwh: f64,
}

/// Standardized sizing answer sent back to the front-end.
/// Real-valued fields are rounded to two decimals by the calculator.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SizingResponse {
    /// Required installed capacity (kW)
    pub system_size_kw: f64,
    /// Number of discrete panels, always at least one
    pub panel_count: u32,
    /// Estimated monthly savings (COP)
    pub monthly_savings_cop: f64,
    /// Estimated total installation cost (COP)
    pub installation_cost_cop: f64,
    /// Simple payback period (years)
    pub payback_years: f64,
    /// Rooftop area required (m²)
    pub area_m2: f64,
}

impl From<SizingResult> for SizingResponse {
    fn from(r: SizingResult) -> Self {
        Self {
            system_size_kw: r.system_size_kw,
            panel_count: r.panel_count,
            monthly_savings_cop: r.monthly_savings_cop,
            installation_cost_cop: r.installation_cost_cop,
            payback_years: r.payback_years,
            area_m2: r.area_m2,
        }
    }
}

// ─── Service info / error bodies ─────────────────────────────────────────────

/// Static payload for the liveness endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
}

/// Uniform error shape for 4xx/5xx responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
