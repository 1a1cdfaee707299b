/// Language the tool responses are rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

/// Labels used by the alert template
pub struct AlertLabels {
    pub event: &'static str,
    pub area: &'static str,
    pub severity: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
}

/// Labels used by the forecast period template
pub struct PeriodLabels {
    pub temperature: &'static str,
    pub wind: &'static str,
    pub forecast: &'static str,
}

impl Language {
    pub fn alerts_not_found(self) -> &'static str {
        match self {
            Language::Chinese => "没有找到相关的天气预警信息",
            Language::English => "No alert information found.",
        }
    }

    pub fn no_active_alerts(self) -> &'static str {
        match self {
            Language::Chinese => "当前没有生效的天气预警",
            Language::English => "No alerts currently in effect.",
        }
    }

    pub fn forecast_not_found(self) -> &'static str {
        match self {
            Language::Chinese => "没有找到相关的天气预报信息",
            Language::English => "No forecast information found.",
        }
    }

    pub fn forecast_data_not_found(self) -> &'static str {
        match self {
            Language::Chinese => "没有找到相关的天气预报数据",
            Language::English => "No forecast data found.",
        }
    }

    pub fn unknown(self) -> &'static str {
        match self {
            Language::Chinese => "未知",
            Language::English => "Unknown",
        }
    }

    pub fn no_description(self) -> &'static str {
        match self {
            Language::Chinese => "无描述信息",
            Language::English => "No description available",
        }
    }

    pub fn no_instruction(self) -> &'static str {
        match self {
            Language::Chinese => "无具体指令",
            Language::English => "No specific instructions provided",
        }
    }

    pub fn alert_labels(self) -> AlertLabels {
        match self {
            Language::Chinese => AlertLabels {
                event: "预警类型",
                area: "影响区域",
                severity: "严重程度",
                description: "预警描述",
                instruction: "处置建议",
            },
            Language::English => AlertLabels {
                event: "Event",
                area: "Area",
                severity: "Severity",
                description: "Description",
                instruction: "Instructions",
            },
        }
    }

    pub fn period_labels(self) -> PeriodLabels {
        match self {
            Language::Chinese => PeriodLabels {
                temperature: "温度",
                wind: "风力",
                forecast: "预报",
            },
            Language::English => PeriodLabels {
                temperature: "Temperature",
                wind: "Wind",
                forecast: "Forecast",
            },
        }
    }
}
