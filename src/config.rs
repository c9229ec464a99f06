//! Configuration management for comboclick

use crate::pressed_state::MousePressPolicy;
use crate::ClickerError;

/// Configuration for the auto-clicker
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Delay in milliseconds between clicks, 0 clicks as fast as possible
    pub click_wait_ms: u64,

    /// Clicks per throughput report
    pub log_every: u64,

    /// How mouse hook events map onto the pressed state
    pub mouse_policy: MousePressPolicy,

    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            click_wait_ms: 0,
            log_every: 400,
            mouse_policy: MousePressPolicy::HoldOnly,
            verbose: false,
        }
    }
}

impl Config {
    /// Set the delay between clicks
    pub fn with_click_wait(mut self, wait_ms: u64) -> Self {
        self.click_wait_ms = wait_ms;
        self
    }

    /// Set the number of clicks per throughput report
    pub fn with_log_every(mut self, clicks: u64) -> Self {
        self.log_every = clicks;
        self
    }

    /// Set the mouse classification policy
    pub fn with_mouse_policy(mut self, policy: MousePressPolicy) -> Self {
        self.mouse_policy = policy;
        self
    }

    /// Enable verbose logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Defaults overlaid with `COMBOCLICK_*` environment variables
    pub fn from_env() -> Result<Self, ClickerError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup`
    ///
    /// Recognized variables: `COMBOCLICK_CLICK_WAIT_MS`,
    /// `COMBOCLICK_LOG_EVERY`, `COMBOCLICK_MOUSE_POLICY`
    /// (`hold-only` | `down-is-press`) and `COMBOCLICK_VERBOSE`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClickerError> {
        let mut config = Self::default();

        if let Some(value) = lookup("COMBOCLICK_CLICK_WAIT_MS") {
            config.click_wait_ms = parse_u64("COMBOCLICK_CLICK_WAIT_MS", &value)?;
        }

        if let Some(value) = lookup("COMBOCLICK_LOG_EVERY") {
            let clicks = parse_u64("COMBOCLICK_LOG_EVERY", &value)?;
            if clicks == 0 {
                return Err(ClickerError::Config(
                    "COMBOCLICK_LOG_EVERY must be at least 1".to_string(),
                ));
            }
            config.log_every = clicks;
        }

        if let Some(value) = lookup("COMBOCLICK_MOUSE_POLICY") {
            config.mouse_policy = match value.trim().to_ascii_lowercase().as_str() {
                "hold-only" => MousePressPolicy::HoldOnly,
                "down-is-press" => MousePressPolicy::DownIsPress,
                other => {
                    return Err(ClickerError::Config(format!(
                        "COMBOCLICK_MOUSE_POLICY: unknown policy '{}'",
                        other
                    )))
                }
            };
        }

        if let Some(value) = lookup("COMBOCLICK_VERBOSE") {
            config.verbose = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    return Err(ClickerError::Config(format!(
                        "COMBOCLICK_VERBOSE: expected a boolean, got '{}'",
                        other
                    )))
                }
            };
        }

        Ok(config)
    }
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ClickerError> {
    value
        .trim()
        .parse()
        .map_err(|e| ClickerError::Config(format!("{}: invalid number '{}': {}", name, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ClickerError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.click_wait_ms, 0);
        assert_eq!(config.log_every, 400);
        assert_eq!(config.mouse_policy, MousePressPolicy::HoldOnly);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder() {
        let config = Config::default()
            .with_click_wait(5)
            .with_log_every(10)
            .with_mouse_policy(MousePressPolicy::DownIsPress)
            .with_verbose(true);
        assert_eq!(config.click_wait_ms, 5);
        assert_eq!(config.log_every, 10);
        assert_eq!(config.mouse_policy, MousePressPolicy::DownIsPress);
        assert!(config.verbose);
    }

    #[test]
    fn test_no_vars_gives_defaults() {
        assert_eq!(from_pairs(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = from_pairs(&[
            ("COMBOCLICK_CLICK_WAIT_MS", "5"),
            ("COMBOCLICK_LOG_EVERY", " 1000 "),
            ("COMBOCLICK_MOUSE_POLICY", "down-is-press"),
            ("COMBOCLICK_VERBOSE", "true"),
        ])
        .unwrap();
        assert_eq!(config.click_wait_ms, 5);
        assert_eq!(config.log_every, 1000);
        assert_eq!(config.mouse_policy, MousePressPolicy::DownIsPress);
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            from_pairs(&[("COMBOCLICK_CLICK_WAIT_MS", "soon")]),
            Err(ClickerError::Config(_))
        ));
        assert!(matches!(
            from_pairs(&[("COMBOCLICK_LOG_EVERY", "0")]),
            Err(ClickerError::Config(_))
        ));
        assert!(matches!(
            from_pairs(&[("COMBOCLICK_MOUSE_POLICY", "sometimes")]),
            Err(ClickerError::Config(_))
        ));
        assert!(matches!(
            from_pairs(&[("COMBOCLICK_VERBOSE", "maybe")]),
            Err(ClickerError::Config(_))
        ));
    }
}
