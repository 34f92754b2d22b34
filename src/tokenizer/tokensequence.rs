use std::{
    fmt::{self, Display},
    ops::Deref,
    slice::Iter,
};

use serde::Serialize;

use super::Token;
use crate::error::Result;

/// 有序的单词/空白序列，按顺序拼接即可还原原字符串
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub(super) fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|token| !token.is_space()).count()
    }

    pub fn space_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_space()).count()
    }

    /// 所有单词中的字素总数（空白不计）
    pub fn letter_count(&self) -> usize {
        self.tokens
            .iter()
            .filter_map(Token::as_word)
            .map(|word| word.len())
            .sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Display for TokenSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.tokens
            .iter()
            .try_for_each(|token| write!(formatter, "{token}"))
    }
}

// 实现Deref，可以直接当作切片使用（len、is_empty、get 等）
impl Deref for TokenSequence {
    type Target = [Token];
    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
