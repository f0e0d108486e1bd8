use crate::debug::DEFAULT_CONSOLE_LINES;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Options a controller page passes to `setup_controller_ui`.
///
/// Keys use the camelCase names controller pages already send
/// (`numConsoleLines`, `orientationOptional`, ...). Missing keys take their
/// defaults and unknown keys are ignored, so callback entries such as
/// `connectFn` pass through harmlessly.
///
/// Pages are loosely typed: the flags accept any value and follow JavaScript
/// truthiness (`1`, `"true"` are on; `0`, `""`, `null` are off). A line count
/// or orientation of the wrong type is logged and replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerOptions {
    /// Shows the status line and the scrollback console.
    #[serde(deserialize_with = "truthy")]
    pub debug: bool,
    #[serde(deserialize_with = "line_count")]
    pub num_console_lines: usize,
    /// e.g. "portrait-primary", "landscape-secondary" or "none".
    #[serde(deserialize_with = "orientation_name")]
    pub orientation: Option<String>,
    /// Don't ask the user to rotate when the device can't lock orientation.
    #[serde(deserialize_with = "truthy")]
    pub orientation_optional: bool,
    #[serde(deserialize_with = "truthy")]
    pub require_app: bool,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Value::deserialize(deserializer).map(|v| is_truthy(&v))
}

fn line_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Null => Some(0),
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(count.unwrap_or_else(|| {
        log::warn!("numConsoleLines {value} is not a line count, using {DEFAULT_CONSOLE_LINES}");
        DEFAULT_CONSOLE_LINES
    }))
}

fn orientation_name<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => {
            log::warn!("orientation {other} is not a string, ignoring it");
            Ok(None)
        }
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debug: false,
            num_console_lines: DEFAULT_CONSOLE_LINES,
            orientation: None,
            orientation_optional: false,
            require_app: false,
        }
    }
}

impl ControllerOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Scrollback length, with zero meaning "use the default".
    pub const fn console_lines(&self) -> usize {
        if self.num_console_lines == 0 {
            DEFAULT_CONSOLE_LINES
        } else {
            self.num_console_lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let options = ControllerOptions::from_json("{}").unwrap();
        assert_eq!(options, ControllerOptions::default());
        assert_eq!(options.console_lines(), 10);
    }

    #[test]
    fn test_camel_case_keys() {
        let options = ControllerOptions::from_json(
            r#"{"debug":true,"numConsoleLines":3,"orientation":"landscape-primary","orientationOptional":true,"requireApp":true}"#,
        )
        .unwrap();
        assert!(options.debug);
        assert_eq!(options.console_lines(), 3);
        assert_eq!(options.orientation.as_deref(), Some("landscape-primary"));
        assert!(options.orientation_optional);
        assert!(options.require_app);
    }

    #[test]
    fn test_zero_lines_means_default() {
        let options = ControllerOptions::from_json(r#"{"numConsoleLines":0}"#).unwrap();
        assert_eq!(options.console_lines(), 10);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let options =
            ControllerOptions::from_json(r#"{"connectFn":null,"orientation":null}"#).unwrap();
        assert_eq!(options.orientation, None);
    }

    #[test]
    fn test_flags_follow_js_truthiness() {
        let options = ControllerOptions::from_json(
            r#"{"debug":"true","orientationOptional":1,"requireApp":0}"#,
        )
        .unwrap();
        assert!(options.debug);
        assert!(options.orientation_optional);
        assert!(!options.require_app);

        let options =
            ControllerOptions::from_json(r#"{"debug":"","orientationOptional":{},"requireApp":null}"#)
                .unwrap();
        assert!(!options.debug);
        assert!(options.orientation_optional);
        assert!(!options.require_app);
    }

    #[test]
    fn test_mistyped_values_fall_back_to_defaults() {
        let options =
            ControllerOptions::from_json(r#"{"numConsoleLines":"lots","orientation":90}"#).unwrap();
        assert_eq!(options.console_lines(), 10);
        assert_eq!(options.orientation, None);

        let options = ControllerOptions::from_json(r#"{"numConsoleLines":"4"}"#).unwrap();
        assert_eq!(options.console_lines(), 4);
    }
}
