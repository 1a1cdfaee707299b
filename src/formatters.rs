use crate::constants::{BLOCK_SEPARATOR, MAX_FORECAST_PERIODS};
use crate::messages::Language;
use crate::models::{AlertFeature, ForecastPeriod};

/// Formats a single alert into a fixed template block
pub fn format_alert(feature: &AlertFeature, language: Language) -> String {
    let props = &feature.properties;
    let labels = language.alert_labels();
    let unknown = language.unknown();

    format!(
        "\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n",
        labels.event,
        props.event.as_deref().unwrap_or(unknown),
        labels.area,
        props.area_desc.as_deref().unwrap_or(unknown),
        labels.severity,
        props.severity.as_deref().unwrap_or(unknown),
        labels.description,
        props
            .description
            .as_deref()
            .unwrap_or(language.no_description()),
        labels.instruction,
        props
            .instruction
            .as_deref()
            .unwrap_or(language.no_instruction()),
    )
    .trim()
    .to_string()
}

/// Formats every alert and joins the blocks with the separator
pub fn format_alerts(features: &[AlertFeature], language: Language) -> String {
    features
        .iter()
        .map(|feature| format_alert(feature, language))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Formats one forecast period
pub fn format_period(period: &ForecastPeriod, language: Language) -> String {
    let labels = language.period_labels();
    let unknown = language.unknown();
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_else(|| unknown.to_string());

    format!(
        "\n{}:\n{}: {}\u{00b0}{}\n{}: {} {}\n{}: {}\n",
        period.name.as_deref().unwrap_or(unknown),
        labels.temperature,
        temperature,
        period.temperature_unit.as_deref().unwrap_or_default(),
        labels.wind,
        period.wind_speed.as_deref().unwrap_or(unknown),
        period.wind_direction.as_deref().unwrap_or_default(),
        labels.forecast,
        period.detailed_forecast.as_deref().unwrap_or(unknown),
    )
    .trim()
    .to_string()
}

/// Formats the leading forecast periods, keeping upstream order
pub fn format_forecast(periods: &[ForecastPeriod], language: Language) -> String {
    periods
        .iter()
        .take(MAX_FORECAST_PERIODS)
        .map(|period| format_period(period, language))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertProperties;

    fn period(name: &str) -> ForecastPeriod {
        ForecastPeriod {
            name: Some(name.to_string()),
            temperature: Some(72.0),
            temperature_unit: Some("F".to_string()),
            wind_speed: Some("10 mph".to_string()),
            wind_direction: Some("NW".to_string()),
            detailed_forecast: Some(format!("{} is sunny.", name)),
        }
    }

    fn alert() -> AlertFeature {
        AlertFeature {
            properties: AlertProperties {
                event: Some("Flood Warning".to_string()),
                area_desc: Some("Sacramento County".to_string()),
                severity: Some("Severe".to_string()),
                description: Some("River rising.".to_string()),
                instruction: Some("Move to higher ground.".to_string()),
            },
        }
    }

    #[test]
    fn alert_contains_fields_verbatim() {
        let text = format_alert(&alert(), Language::English);
        assert_eq!(
            text,
            "Event: Flood Warning\n\
             Area: Sacramento County\n\
             Severity: Severe\n\
             Description: River rising.\n\
             Instructions: Move to higher ground."
        );
    }

    #[test]
    fn alert_defaults_only_missing_fields() {
        let mut feature = alert();
        feature.properties.description = None;
        feature.properties.instruction = None;

        let text = format_alert(&feature, Language::English);
        assert!(text.contains("Event: Flood Warning"));
        assert!(text.contains("Description: No description available"));
        assert!(text.contains("Instructions: No specific instructions provided"));

        let text = format_alert(&alert(), Language::English);
        assert!(!text.contains("No description available"));
        assert!(!text.contains("No specific instructions provided"));
    }

    #[test]
    fn alert_without_properties_renders_placeholders() {
        let text = format_alert(&AlertFeature::default(), Language::Chinese);
        assert!(text.starts_with("预警类型: 未知"));
        assert!(text.contains("预警描述: 无描述信息"));
        assert!(text.ends_with("处置建议: 无具体指令"));
    }

    #[test]
    fn alerts_are_joined_with_separator() {
        let text = format_alerts(&[alert(), alert()], Language::English);
        assert_eq!(text.matches("\n---\n").count(), 1);
    }

    #[test]
    fn period_block_layout() {
        let text = format_period(&period("Tonight"), Language::English);
        assert_eq!(
            text,
            "Tonight:\nTemperature: 72\u{00b0}F\nWind: 10 mph NW\nForecast: Tonight is sunny."
        );

        let text = format_period(&period("今晚"), Language::Chinese);
        assert!(text.starts_with("今晚:\n温度: 72\u{00b0}F"));
    }

    #[test]
    fn forecast_keeps_first_five_in_order() {
        let periods: Vec<_> = (1..=7).map(|i| period(&format!("P{}", i))).collect();
        let text = format_forecast(&periods, Language::English);
        let blocks: Vec<_> = text.split("\n---\n").collect();

        assert_eq!(blocks.len(), 5);
        for (i, block) in blocks.iter().enumerate() {
            assert!(block.starts_with(&format!("P{}:", i + 1)));
        }
        assert!(!text.contains("P6"));
    }

    #[test]
    fn forecast_renders_every_period_under_limit() {
        for n in 0..=5 {
            let periods: Vec<_> = (1..=n).map(|i| period(&format!("P{}", i))).collect();
            let text = format_forecast(&periods, Language::English);
            if n == 0 {
                assert_eq!(text, "");
            } else {
                assert_eq!(text.split("\n---\n").count(), n);
            }
        }
    }
}
