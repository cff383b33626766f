use serde::Deserialize;

use crate::notification::NotificationTiming;
use crate::scroll::ScrollThresholds;

pub const CONFIG_ELEMENT_ID: &str = "interaction-config";

const DEFAULT_NAVBAR_ELEVATE_AFTER: f64 = 100.0;
const DEFAULT_SECTION_LOOKAHEAD: f64 = 200.0;
const DEFAULT_SCROLL_TOP_AFTER: f64 = 500.0;
const DEFAULT_ANCHOR_OFFSET: f64 = 70.0;
const DEFAULT_NOTIFICATION_DWELL_MS: u32 = 4_000;
const DEFAULT_NOTIFICATION_EXIT_MS: u32 = 300;
const DEFAULT_TYPING_START_DELAY_MS: u32 = 500;
const DEFAULT_TYPING_CHAR_INTERVAL_MS: u32 = 100;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const NAVBAR_ELEVATE_AFTER_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const SECTION_LOOKAHEAD_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const SCROLL_TOP_AFTER_BOUNDS: (f64, f64) = (0.0, 20_000.0);
const ANCHOR_OFFSET_BOUNDS: (f64, f64) = (0.0, 500.0);
const NOTIFICATION_DWELL_MS_BOUNDS: (u32, u32) = (500, 60_000);
const NOTIFICATION_EXIT_MS_BOUNDS: (u32, u32) = (0, 5_000);
const TYPING_START_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const TYPING_CHAR_INTERVAL_MS_BOUNDS: (u32, u32) = (10, 2_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }

    pub fn to_log(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    pub navbar_elevate_after: f64,
    pub section_lookahead: f64,
    pub scroll_top_after: f64,
    pub anchor_offset: f64,
    pub notification_dwell_ms: u32,
    pub notification_exit_ms: u32,
    pub typing_start_delay_ms: u32,
    pub typing_char_interval_ms: u32,
    pub log_level: LogLevel,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            navbar_elevate_after: DEFAULT_NAVBAR_ELEVATE_AFTER,
            section_lookahead: DEFAULT_SECTION_LOOKAHEAD,
            scroll_top_after: DEFAULT_SCROLL_TOP_AFTER,
            anchor_offset: DEFAULT_ANCHOR_OFFSET,
            notification_dwell_ms: DEFAULT_NOTIFICATION_DWELL_MS,
            notification_exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            typing_char_interval_ms: DEFAULT_TYPING_CHAR_INTERVAL_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

// Every field is optional and untyped so that one bad value only resets that field.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawInteractionConfig {
    navbar_elevate_after: Option<serde_json::Value>,
    section_lookahead: Option<serde_json::Value>,
    scroll_top_after: Option<serde_json::Value>,
    anchor_offset: Option<serde_json::Value>,
    notification_dwell_ms: Option<serde_json::Value>,
    notification_exit_ms: Option<serde_json::Value>,
    typing_start_delay_ms: Option<serde_json::Value>,
    typing_char_interval_ms: Option<serde_json::Value>,
    log_level: Option<serde_json::Value>,
}

impl InteractionConfig {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawInteractionConfig = serde_json::from_str(source)?;
        Ok(Self::from_raw(raw))
    }

    /// Reads the optional inline config block. A rejected block still yields
    /// the defaults, and the error is handed back for reporting.
    pub fn resolve(source: Option<&str>) -> (Self, Option<serde_json::Error>) {
        match source.map(Self::from_json).transpose() {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(error) => (Self::default(), Some(error)),
        }
    }

    fn from_raw(raw: RawInteractionConfig) -> Self {
        Self {
            navbar_elevate_after: parse_f64_with_bounds(
                raw.navbar_elevate_after.as_ref(),
                DEFAULT_NAVBAR_ELEVATE_AFTER,
                NAVBAR_ELEVATE_AFTER_BOUNDS,
            ),
            section_lookahead: parse_f64_with_bounds(
                raw.section_lookahead.as_ref(),
                DEFAULT_SECTION_LOOKAHEAD,
                SECTION_LOOKAHEAD_BOUNDS,
            ),
            scroll_top_after: parse_f64_with_bounds(
                raw.scroll_top_after.as_ref(),
                DEFAULT_SCROLL_TOP_AFTER,
                SCROLL_TOP_AFTER_BOUNDS,
            ),
            anchor_offset: parse_f64_with_bounds(
                raw.anchor_offset.as_ref(),
                DEFAULT_ANCHOR_OFFSET,
                ANCHOR_OFFSET_BOUNDS,
            ),
            notification_dwell_ms: parse_u32_with_bounds(
                raw.notification_dwell_ms.as_ref(),
                DEFAULT_NOTIFICATION_DWELL_MS,
                NOTIFICATION_DWELL_MS_BOUNDS,
            ),
            notification_exit_ms: parse_u32_with_bounds(
                raw.notification_exit_ms.as_ref(),
                DEFAULT_NOTIFICATION_EXIT_MS,
                NOTIFICATION_EXIT_MS_BOUNDS,
            ),
            typing_start_delay_ms: parse_u32_with_bounds(
                raw.typing_start_delay_ms.as_ref(),
                DEFAULT_TYPING_START_DELAY_MS,
                TYPING_START_DELAY_MS_BOUNDS,
            ),
            typing_char_interval_ms: parse_u32_with_bounds(
                raw.typing_char_interval_ms.as_ref(),
                DEFAULT_TYPING_CHAR_INTERVAL_MS,
                TYPING_CHAR_INTERVAL_MS_BOUNDS,
            ),
            log_level: raw
                .log_level
                .as_ref()
                .and_then(serde_json::Value::as_str)
                .and_then(LogLevel::parse)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    pub fn scroll_thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            elevate_after: self.navbar_elevate_after,
            section_lookahead: self.section_lookahead,
            scroll_top_after: self.scroll_top_after,
        }
    }

    pub fn notification_timing(&self) -> NotificationTiming {
        NotificationTiming {
            dwell_ms: u64::from(self.notification_dwell_ms),
            exit_ms: u64::from(self.notification_exit_ms),
        }
    }
}

fn parse_f64_with_bounds(value: Option<&serde_json::Value>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(serde_json::Value::as_f64)
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

/// Integral floats such as `2500.0` are accepted; fractional values fall back.
fn parse_u32_with_bounds(value: Option<&serde_json::Value>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.as_u64().or_else(|| value.as_f64().and_then(integral_f64)))
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn integral_f64(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults() {
        let config = InteractionConfig::from_json("  ").expect("blank config is accepted");
        assert_eq!(config, InteractionConfig::default());
    }

    #[test]
    fn known_fields_override_defaults() {
        let config = InteractionConfig::from_json(
            r#"{"sectionLookahead": 120, "notificationDwellMs": 2500, "logLevel": "DEBUG"}"#,
        )
        .expect("valid json");

        assert_eq!(config.section_lookahead, 120.0);
        assert_eq!(config.notification_dwell_ms, 2_500);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.navbar_elevate_after, 100.0);
    }

    #[test]
    fn out_of_bounds_or_mistyped_values_fall_back_per_field() {
        let config = InteractionConfig::from_json(
            r#"{"anchorOffset": 9000, "typingCharIntervalMs": 1, "scrollTopAfter": "far", "notificationExitMs": 150}"#,
        )
        .expect("valid json");

        assert_eq!(config.anchor_offset, 70.0);
        assert_eq!(config.typing_char_interval_ms, 100);
        assert_eq!(config.scroll_top_after, 500.0);
        assert_eq!(config.notification_exit_ms, 150);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(InteractionConfig::from_json("{not json").is_err());
    }

    #[test]
    fn resolve_picks_the_log_level_before_logging_starts() {
        let (config, rejected) = InteractionConfig::resolve(Some(r#"{"logLevel": "warn"}"#));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(rejected.is_none());

        let (config, rejected) = InteractionConfig::resolve(None);
        assert_eq!(config, InteractionConfig::default());
        assert!(rejected.is_none());

        let (config, rejected) = InteractionConfig::resolve(Some("{broken"));
        assert_eq!(config, InteractionConfig::default());
        assert!(rejected.is_some());
    }

    #[test]
    fn unknown_log_level_keeps_default() {
        let config = InteractionConfig::from_json(r#"{"logLevel": "trace"}"#).expect("valid json");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn mistyped_log_level_keeps_other_fields() {
        let config = InteractionConfig::from_json(r#"{"sectionLookahead": 120, "logLevel": 3}"#)
            .expect("a bad log level only resets that field");
        assert_eq!(config.section_lookahead, 120.0);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn integral_floats_are_accepted_for_millisecond_fields() {
        let config = InteractionConfig::from_json(
            r#"{"notificationDwellMs": 2500.0, "notificationExitMs": 150.5, "typingStartDelayMs": -1.0}"#,
        )
        .expect("valid json");
        assert_eq!(config.notification_dwell_ms, 2_500);
        assert_eq!(config.notification_exit_ms, 300);
        assert_eq!(config.typing_start_delay_ms, 500);
    }

    #[test]
    fn scroll_thresholds_follow_config() {
        let config = InteractionConfig::from_json(r#"{"navbarElevateAfter": 40}"#).expect("valid json");
        let thresholds = config.scroll_thresholds();
        assert_eq!(thresholds.elevate_after, 40.0);
        assert_eq!(thresholds.section_lookahead, 200.0);
        assert_eq!(thresholds.scroll_top_after, 500.0);
    }

    #[test]
    fn default_notification_timing_is_four_seconds_plus_exit() {
        let timing = InteractionConfig::default().notification_timing();
        assert_eq!(timing.dwell_ms, 4_000);
        assert_eq!(timing.exit_ms, 300);
    }
}
