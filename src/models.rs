use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================
//
// Every key is optional: a missing key is an expected upstream shape, and the
// callers decide per key whether it means "not found" or a default.

#[derive(Debug, Default, Deserialize)]
pub struct AlertResponse {
    pub features: Option<Vec<AlertFeature>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsResponse {
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsProperties {
    /// Absolute URL of the gridpoint forecast for this point
    pub forecast: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub properties: ForecastProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastPeriod {
    pub name: Option<String>,
    pub temperature: Option<f64>,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection")]
    pub wind_direction: Option<String>,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state or area code, e.g. CA or NY
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}
