use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Accept header value the NWS API answers with GeoJSON for
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Per-request timeout for upstream calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of forecast periods rendered per call
pub const MAX_FORECAST_PERIODS: usize = 5;

/// Separator placed between rendered alerts or forecast periods
pub const BLOCK_SEPARATOR: &str = "\n---\n";
