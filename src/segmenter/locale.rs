use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Serialize;

use crate::error::Error;

const DEFAULT_LOCALE: &str = "en";

/// 语言标识（BCP 47 风格，例如 `en`、`de-AT`、`zh-Hant-TW`）
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 主语言子标签，例如 `de-AT` 的 `de`
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(DEFAULT_LOCALE)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(String::from(DEFAULT_LOCALE))
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // `_` 统一换成 `-`，例如 `de_AT` -> `de-AT`
        let normalized = value.trim().replace('_', "-");
        let mut subtags = normalized.split('-');

        let valid_language = subtags.next().is_some_and(|language| {
            (2..=8).contains(&language.len()) && language.chars().all(|ch| ch.is_ascii_alphabetic())
        });
        let valid_rest = subtags.all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.chars().all(|ch| ch.is_ascii_alphanumeric())
        });

        if valid_language && valid_rest {
            Ok(Self(normalized))
        } else {
            Err(Error::InvalidLocale(value.to_string()))
        }
    }
}

impl Display for Locale {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
