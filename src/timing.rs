use std::{
    fmt::{self, Display},
    str::FromStr,
    time::Duration,
};

use serde::Serialize;

use crate::error::Error;

/// 默认的开始延迟
pub const DEFAULT_DELAY: Duration = Duration::from_millis(0);
/// 默认的逐字母错开延迟
pub const DEFAULT_DRAG_DELAY: Duration = Duration::from_millis(50);
/// 默认的单个字母动画时长
pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);

/// CSS 时间值：`<number>s`、`<number>ms` 或样式变量引用 `var(--name)`。
///
/// 解析（`FromStr`）只在调用方边界使用；渲染时原样输出，不再校验。
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimingValue(String);

impl TimingValue {
    pub fn millis(millis: u64) -> Self {
        Self(format!("{millis}ms"))
    }

    /// 不做校验，原样保存，例如 `-200ms` 或 `calc(1s + 50ms)`。
    /// 组件只负责把值写进样式变量，校验留给命令行和环境变量这些入口。
    pub fn verbatim(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为 `var(--name)` 形式的变量引用
    pub fn is_variable(&self) -> bool {
        self.0.starts_with("var(")
    }

    /// 转换为具体时长；变量引用等无法解析的值返回 `None`，负数按 0 处理
    pub fn to_duration(&self) -> Option<Duration> {
        // 先判断 ms，否则 "5ms" 会被当成 "5m" + "s"
        let (number, nanos_per_unit) = if let Some(number) = self.0.strip_suffix("ms") {
            (number, 1e6)
        } else if let Some(number) = self.0.strip_suffix('s') {
            (number, 1e9)
        } else {
            return None;
        };
        let nanos = (parse_number(number)? * nanos_per_unit).round().max(0.0);
        // clippy::as_conversions: 非负且有限，超出范围时饱和到 u64::MAX
        #[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nanos = nanos as u64;
        Some(Duration::from_nanos(nanos))
    }
}

// CSS 数字：可带符号和指数，例如 "0"、"1.5"、".25"、"-200"、"1e3"
fn parse_number(number: &str) -> Option<f64> {
    let valid = number
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-' | 'e' | 'E'))
        && number.chars().any(|ch| ch.is_ascii_digit());
    if valid {
        number.parse::<f64>().ok().filter(|number| number.is_finite())
    } else {
        None
    }
}

fn is_variable_reference(value: &str) -> bool {
    value
        .strip_prefix("var(--")
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|name| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
        })
}

impl FromStr for TimingValue {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let candidate = Self(value.to_string());
        if is_variable_reference(value) || candidate.to_duration().is_some() {
            Ok(candidate)
        } else {
            Err(Error::InvalidTimingValue(value.to_string()))
        }
    }
}

impl Display for TimingValue {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// 可选的动画时间参数，未提供的项使用样式表里的默认值
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Timing {
    pub delay: Option<TimingValue>,
    pub drag_delay: Option<TimingValue>,
    pub duration: Option<TimingValue>,
}

impl Timing {
    /// 用 `other` 中已设置的项覆盖当前值
    pub fn merge(self, other: Self) -> Self {
        Self {
            delay: other.delay.or(self.delay),
            drag_delay: other.drag_delay.or(self.drag_delay),
            duration: other.duration.or(self.duration),
        }
    }

    /// 以 (CSS 变量名, 值) 的形式列出已设置的项
    pub fn style_variables(&self) -> impl Iterator<Item = (&'static str, &TimingValue)> {
        [
            ("--delay", self.delay.as_ref()),
            ("--dragDelay", self.drag_delay.as_ref()),
            ("--duration", self.duration.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
    }
}

/// 时间参数的可调范围（毫秒），和演示程序里的滑块一致
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TimingRange {
    pub min: u64,
    pub max: u64,
    pub step: u64,
    pub default: u64,
}

impl TimingRange {
    pub const DELAY: Self = Self { min: 0, max: 5000, step: 100, default: 0 };
    pub const DRAG_DELAY: Self = Self { min: 0, max: 200, step: 5, default: 50 };
    pub const DURATION: Self = Self { min: 100, max: 2000, step: 50, default: 400 };

    /// 按步长增加或减少，结果限制在范围内
    pub fn step_by(&self, current: Option<&TimingValue>, increase: bool) -> TimingValue {
        let millis = current
            .and_then(TimingValue::to_duration)
            .map_or(self.default, |duration| {
                u64::try_from(duration.as_millis()).unwrap_or(self.max)
            });
        let next = if increase {
            millis.saturating_add(self.step)
        } else {
            millis.saturating_sub(self.step)
        };
        TimingValue::millis(next.clamp(self.min, self.max))
    }
}
