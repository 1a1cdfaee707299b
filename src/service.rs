use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::NwsClient;
use crate::config::Config;
use crate::models::{GetAlertsRequest, GetForecastRequest};
use crate::operations::{alerts_report, forecast_report};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: NwsClient,
    config: Config,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a service against the public NWS API
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            client: NwsClient::new()?,
            config,
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and forecasts for US locations, powered by the \
                National Weather Service API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = alerts_report(&self.client, &self.config, &request.state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the short-term forecast for a coordinate
    #[tool(description = "Get the weather forecast for a US location. Provide latitude and longitude (e.g., latitude: 38.58, longitude: -121.49 for Sacramento).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text =
            forecast_report(&self.client, &self.config, request.latitude, request.longitude).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
