use std::{env, str::FromStr};

use crate::segmenter::Locale;
use crate::timing::{Timing, TimingValue};

/// 从环境变量读取的默认设置，命令行参数会覆盖它们
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub locale: Locale,
    pub timing: Timing,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过 `lookup` 取值，方便测试时不依赖进程环境
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            locale: parse_var(&lookup, "TYPEWRITER_LOCALE").unwrap_or_default(),
            timing: Timing {
                delay: parse_var::<TimingValue>(&lookup, "TYPEWRITER_DELAY"),
                drag_delay: parse_var::<TimingValue>(&lookup, "TYPEWRITER_DRAG_DELAY"),
                duration: parse_var::<TimingValue>(&lookup, "TYPEWRITER_DURATION"),
            },
        }
    }
}

// 无法解析的值忽略并给出警告
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(key)?;
    value
        .parse()
        .map_err(|err| tracing::warn!("Ignoring {key}: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_locale_and_timing() {
        let config = config_from(&[
            ("TYPEWRITER_LOCALE", "de-AT"),
            ("TYPEWRITER_DELAY", "2s"),
            ("TYPEWRITER_DURATION", "750ms"),
        ]);
        assert_eq!(config.locale.as_str(), "de-AT");
        assert_eq!(config.timing.delay.as_ref().map(TimingValue::as_str), Some("2s"));
        assert_eq!(config.timing.drag_delay, None);
        assert_eq!(config.timing.duration, Some(TimingValue::millis(750)));
    }

    #[test]
    fn ignores_invalid_values() {
        let config = config_from(&[("TYPEWRITER_LOCALE", "??"), ("TYPEWRITER_DRAG_DELAY", "fast")]);
        assert_eq!(config.locale, Locale::default());
        assert_eq!(config.timing.drag_delay, None);
    }
}
