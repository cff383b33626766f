use serde_json::{Map, Number, Value};

#[cfg(target_arch = "wasm32")]
use crate::config::LogLevel;

const WELCOME_LINES: [(&str, &str); 3] = [
    (
        "%c👋 Welcome to my portfolio!",
        "font-size: 20px; color: #4a90e2; font-weight: bold;",
    ),
    (
        "%cBuilt with ❤️ in Rust and WebAssembly",
        "font-size: 14px; color: #6a4c93;",
    ),
    (
        "%cInterested in working together? Reach out via the contact form!",
        "font-size: 12px; color: #2ecc71;",
    ),
];

#[cfg(target_arch = "wasm32")]
pub fn init(level: LogLevel) {
    console_error_panic_hook::set_once();
    // A second init (hot reload) keeps the first logger.
    let _ = console_log::init_with_level(level.to_log());
}

#[cfg(target_arch = "wasm32")]
pub fn print_welcome() {
    for (text, style) in WELCOME_LINES {
        web_sys::console::log_2(&text.into(), &style.into());
    }
}

pub fn log_event(level: log::Level, event: &str, fields: Value) {
    if !log::log_enabled!(level) {
        return;
    }

    log::log!(level, "{}", format_event(now_unix_millis(), level, event, fields));
}

pub fn format_event(ts: u64, level: log::Level, event: &str, fields: Value) -> String {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload).to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_carries_base_fields_and_extras() {
        let line = format_event(
            1_700_000_000_000,
            log::Level::Info,
            "contact_form_submitted",
            json!({"nameLength": 5}),
        );
        let parsed: Value = serde_json::from_str(&line).expect("event is json");

        assert_eq!(parsed["ts"], json!(1_700_000_000_000u64));
        assert_eq!(parsed["level"], json!("info"));
        assert_eq!(parsed["event"], json!("contact_form_submitted"));
        assert_eq!(parsed["nameLength"], json!(5));
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(1, log::Level::Warn, "config_invalid", json!("oops"));
        let parsed: Value = serde_json::from_str(&line).expect("event is json");
        assert_eq!(parsed.as_object().map(Map::len), Some(3));
        assert_eq!(parsed["level"], json!("warn"));
    }

    #[test]
    fn welcome_banner_has_three_lines() {
        assert_eq!(WELCOME_LINES.len(), 3);
        assert!(WELCOME_LINES.iter().all(|(text, style)| text.starts_with("%c") && !style.is_empty()));
    }
}
