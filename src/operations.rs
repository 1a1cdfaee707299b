//! Tool operations: fetch upstream data and render it as text.
//!
//! Both operations always produce a string. Fetch failures are logged and
//! turned into the localized "not found" messages.

use crate::client::Fetch;
use crate::config::Config;
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{AlertResponse, ForecastResponse, PointsResponse};

/// Active alerts for a region code
pub async fn alerts_report<F: Fetch>(fetcher: &F, config: &Config, region_code: &str) -> String {
    let language = config.language;
    let url = config.alerts_url(region_code);

    let features = match fetcher.get_json::<AlertResponse>(&url).await {
        Ok(AlertResponse {
            features: Some(features),
        }) => features,
        Ok(_) => return language.alerts_not_found().to_string(),
        Err(e) => {
            tracing::warn!("Failed to fetch alerts from {}: {}", url, e);
            return language.alerts_not_found().to_string();
        }
    };

    if features.is_empty() {
        return language.no_active_alerts().to_string();
    }

    format_alerts(&features, language)
}

/// Short-term forecast for a coordinate, resolved through the points endpoint
pub async fn forecast_report<F: Fetch>(
    fetcher: &F,
    config: &Config,
    latitude: f64,
    longitude: f64,
) -> String {
    let language = config.language;
    let points_url = config.points_url(latitude, longitude);

    let forecast_url = match fetcher.get_json::<PointsResponse>(&points_url).await {
        Ok(points) => points.properties.and_then(|p| p.forecast),
        Err(e) => {
            tracing::warn!("Failed to fetch grid point from {}: {}", points_url, e);
            None
        }
    };
    let Some(forecast_url) = forecast_url else {
        return language.forecast_not_found().to_string();
    };

    let forecast = match fetcher.get_json::<ForecastResponse>(&forecast_url).await {
        Ok(forecast) => forecast,
        Err(e) => {
            tracing::warn!("Failed to fetch forecast from {}: {}", forecast_url, e);
            return language.forecast_data_not_found().to_string();
        }
    };

    format_forecast(&forecast.properties.periods, language)
}
